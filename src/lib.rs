//! ESG Intake — scripted conversational intake and recommendation.

pub mod cli;
pub mod config;
pub mod error;
pub mod intake;
