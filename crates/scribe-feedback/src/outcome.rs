use scribe_core::models::Notice;

/// Result of a rating or correction submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackOutcome {
    /// Forwarded to the feedback sink.
    Sent {
        message: Option<String>,
        /// Sink-side recommendations, corrections only.
        recommendations: Vec<String>,
    },
    /// A local precondition stopped the submission; nothing was sent.
    Skipped(Notice),
}

impl FeedbackOutcome {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Skipped(notice) => Some(notice),
            Self::Sent { .. } => None,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}
