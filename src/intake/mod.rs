//! Intake conversation — scripted collection of contact details followed
//! by a recommendation.
//!
//! The bot asks for name, email, and phone as free text, then offers fixed
//! option lists for job title and motivation. The final pick selects a
//! recommendation from a small decision table.

pub mod engine;
pub mod model;
pub mod prompts;
pub mod rules;
pub mod state;
pub mod validate;

pub use engine::{DialogueEngine, Turn};
pub use model::{Profile, Speaker, TranscriptEntry, catalog};
pub use rules::{Recommendation, recommend};
pub use state::{IntakeState, Step};
