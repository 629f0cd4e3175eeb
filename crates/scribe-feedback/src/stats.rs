//! Local feedback statistics, for display only.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};
use scribe_core::constants::{GOOD_QUALITY_THRESHOLD, INSIGHT_MIN_RATINGS, RATING_WINDOW};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
struct FieldStats {
    /// Most recent ratings, oldest first, capped at `RATING_WINDOW`.
    recent: VecDeque<u8>,
    ratings: u64,
    corrections: u64,
}

/// Running counters over every rating and correction of this session.
#[derive(Debug, Clone, Default)]
pub struct FeedbackStats {
    fields: BTreeMap<String, FieldStats>,
    total_ratings: u64,
    rating_sum: u64,
    total_corrections: u64,
    last_updated: Option<DateTime<Utc>>,
}

impl FeedbackStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_rating(&mut self, field: &str, rating: u8) {
        let stats = self.fields.entry(field.to_string()).or_default();
        if stats.recent.len() == RATING_WINDOW {
            stats.recent.pop_front();
        }
        stats.recent.push_back(rating);
        stats.ratings += 1;
        self.total_ratings += 1;
        self.rating_sum += u64::from(rating);
        self.last_updated = Some(Utc::now());
    }

    pub fn record_correction(&mut self, field: &str) {
        self.fields.entry(field.to_string()).or_default().corrections += 1;
        self.total_corrections += 1;
        self.last_updated = Some(Utc::now());
    }

    /// Rolling ratings for `field`, oldest first.
    pub fn recent_ratings(&self, field: &str) -> Vec<u8> {
        self.fields
            .get(field)
            .map(|s| s.recent.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn insights(&self, field: &str) -> FieldInsights {
        let stats = self.fields.get(field).cloned().unwrap_or_default();
        let average = if stats.recent.is_empty() {
            0.0
        } else {
            let sum: u64 = stats.recent.iter().map(|&r| u64::from(r)).sum();
            sum as f64 / stats.recent.len() as f64
        };
        let recommendation = if stats.ratings < INSIGHT_MIN_RATINGS {
            "Continuer à collecter des feedbacks"
        } else {
            "Analyser les patterns de correction"
        };
        FieldInsights {
            field: field.to_string(),
            average_rating: round1(average),
            total_ratings: stats.ratings,
            total_corrections: stats.corrections,
            recommendations: vec![recommendation.to_string()],
        }
    }

    pub fn summary(&self) -> FeedbackSummary {
        let average = if self.total_ratings == 0 {
            0.0
        } else {
            self.rating_sum as f64 / self.total_ratings as f64
        };
        let quality_status = if average >= GOOD_QUALITY_THRESHOLD {
            QualityStatus::Good
        } else {
            QualityStatus::NeedsImprovement
        };
        FeedbackSummary {
            total_ratings: self.total_ratings,
            total_corrections: self.total_corrections,
            total_feedback: self.total_ratings + self.total_corrections,
            global_quality_score: round1(average),
            quality_status,
            last_updated: self.last_updated,
        }
    }
}

/// Per-field view of collected feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldInsights {
    pub field: String,
    /// Mean of the rolling window, one decimal; `0.0` without ratings.
    pub average_rating: f64,
    pub total_ratings: u64,
    pub total_corrections: u64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityStatus {
    Good,
    NeedsImprovement,
}

impl QualityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::NeedsImprovement => "needs_improvement",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Good => "Qualité globale satisfaisante",
            Self::NeedsImprovement => "Des améliorations sont nécessaires",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackSummary {
    pub total_ratings: u64,
    pub total_corrections: u64,
    pub total_feedback: u64,
    /// Mean of every rating, one decimal.
    pub global_quality_score: f64,
    pub quality_status: QualityStatus,
    pub last_updated: Option<DateTime<Utc>>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insights_average_and_recommendation() {
        let mut stats = FeedbackStats::new();
        for rating in [4, 5, 4] {
            stats.record_rating("besoin", rating);
        }
        stats.record_correction("besoin");

        let insights = stats.insights("besoin");
        assert_eq!(insights.average_rating, 4.3);
        assert_eq!(insights.total_ratings, 3);
        assert_eq!(insights.total_corrections, 1);
        assert_eq!(insights.recommendations, vec!["Continuer à collecter des feedbacks"]);

        stats.record_rating("besoin", 2);
        stats.record_rating("besoin", 3);
        assert_eq!(
            stats.insights("besoin").recommendations,
            vec!["Analyser les patterns de correction"]
        );
    }

    #[test]
    fn rolling_window_is_capped() {
        let mut stats = FeedbackStats::new();
        stats.record_rating("besoin", 1);
        for _ in 0..RATING_WINDOW {
            stats.record_rating("besoin", 5);
        }
        let recent = stats.recent_ratings("besoin");
        assert_eq!(recent.len(), RATING_WINDOW);
        assert!(recent.iter().all(|&r| r == 5));
        assert_eq!(stats.insights("besoin").total_ratings, RATING_WINDOW as u64 + 1);
    }

    #[test]
    fn summary_quality_threshold() {
        let mut stats = FeedbackStats::new();
        assert_eq!(stats.summary().quality_status, QualityStatus::NeedsImprovement);

        stats.record_rating("besoin", 4);
        stats.record_rating("objectifs", 3);
        let summary = stats.summary();
        assert_eq!(summary.global_quality_score, 3.5);
        assert_eq!(summary.quality_status, QualityStatus::Good);

        stats.record_rating("objectifs", 2);
        stats.record_correction("objectifs");
        let summary = stats.summary();
        assert_eq!(summary.total_feedback, 4);
        assert_eq!(summary.quality_status.as_str(), "needs_improvement");
    }

    #[test]
    fn unknown_field_has_empty_insights() {
        let insights = FeedbackStats::new().insights("inconnu");
        assert_eq!(insights.average_rating, 0.0);
        assert_eq!(insights.total_ratings, 0);
    }
}
