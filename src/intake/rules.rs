//! Recommendation rules — maps (job title, motivation) to a fixed offer.
//!
//! Rules are checked in order and the first match wins:
//! 1. Students and ESG enthusiasts → training sessions
//! 2. ESG professionals and founders → training if they only want the
//!    basics, otherwise the service list
//! 3. Anything else → training sessions

use tracing::debug;

use super::model::catalog;

/// Training sessions, for learners.
pub const TRAINING_FOR_PROFILE: &str =
    "Based on your profile, I recommend our Training sessions that explain what sustainability is.";

/// Training sessions, for decision makers after the basics and for everyone else.
pub const TRAINING_FOR_NEEDS: &str =
    "Based on your needs, I recommend our Training sessions that explain what sustainability is.";

/// The three service offerings.
pub const SERVICES: &str = "Based on your needs, I recommend:
- ESG for business trainings - practical step by step process
- ESG report creation (calculations and words)
- ESG & Sustainability materiality assessment";

/// Which offer the rules picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Generic training, matched on the job title alone.
    TrainingForProfile,
    /// Generic training, matched after looking at the motivation or by fallback.
    TrainingForNeeds,
    /// ESG trainings, report creation, and materiality assessment.
    Services,
}

impl Recommendation {
    /// The Bot message for this recommendation.
    pub fn text(&self) -> &'static str {
        match self {
            Self::TrainingForProfile => TRAINING_FOR_PROFILE,
            Self::TrainingForNeeds => TRAINING_FOR_NEEDS,
            Self::Services => SERVICES,
        }
    }

    /// Whether this is one of the generic training messages.
    pub fn is_training(&self) -> bool {
        !matches!(self, Self::Services)
    }
}

/// Pick a recommendation. Job title is checked before motivation; unknown
/// combinations fall through to generic training.
pub fn recommend(job_title: &str, motivation: &str) -> Recommendation {
    let rec = match job_title {
        catalog::STUDENT | catalog::ESG_ENTHUSIAST => Recommendation::TrainingForProfile,
        catalog::ESG_PROFESSIONAL | catalog::FOUNDER_CEO => {
            if motivation == catalog::BASIC_UNDERSTANDING {
                Recommendation::TrainingForNeeds
            } else {
                Recommendation::Services
            }
        }
        _ => Recommendation::TrainingForNeeds,
    };
    debug!(job_title, recommendation = ?rec, "Selected recommendation");
    rec
}
