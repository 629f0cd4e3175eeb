//! Local precondition outcomes. These are expected user-flow states shown to
//! the user as a notice; no request is sent when one is returned.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Another generation is still outstanding (single-flight).
    GenerationInProgress { in_flight: String },
    /// Every requested field is already filled.
    NothingToGenerate,
    /// `generate_array` was called on a scalar field.
    NotATableField { field: String },
    /// A correction whose corrected value equals the original.
    IdenticalCorrection { field: String },
    /// A rating outside 1..=5.
    RatingOutOfRange { rating: u8 },
}

impl Notice {
    /// Short message the UI displays verbatim.
    pub fn message(&self) -> String {
        match self {
            Self::GenerationInProgress { in_flight } => {
                format!("Une génération est déjà en cours ({in_flight}). Veuillez patienter.")
            }
            Self::NothingToGenerate => "Tous les champs sélectionnés sont déjà remplis.".to_string(),
            Self::NotATableField { field } => format!("« {field} » n'est pas un tableau."),
            Self::IdenticalCorrection { field } => {
                format!("Aucune modification détectée pour « {field} ».")
            }
            Self::RatingOutOfRange { rating } => {
                format!("La note doit être comprise entre 1 et 5 (reçu : {rating}).")
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
