//! DialogueEngine — owns one intake session: the step, the collected
//! answers, and the transcript.

use tracing::{debug, info};
use uuid::Uuid;

use crate::config::IntakeConfig;
use crate::error::IntakeError;

use super::model::{Profile, TranscriptEntry, catalog};
use super::prompts;
use super::rules::{self, Recommendation};
use super::state::{IntakeState, Step};
use super::validate;

/// What a single submission did to the session.
///
/// Informational only; the transcript and step are the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Nothing happened, not even a transcript entry.
    Dropped(IntakeError),
    /// The answer was accepted and the session moved to this step.
    Advanced(Step),
    /// The answer was refused; a re-prompt was appended and the step held.
    Rejected(IntakeError),
    /// A motivation was picked and this recommendation was appended.
    Recommended(Recommendation),
    /// A thank-you was answered with the closing message.
    Closed,
    /// The input was recorded but the current step doesn't take it.
    Inert,
}

/// Drives one intake conversation.
///
/// Each session gets its own engine; submissions run to completion one at a
/// time on `&mut self`.
#[derive(Debug, Clone)]
pub struct DialogueEngine {
    session_id: Uuid,
    state: IntakeState,
    transcript: Vec<TranscriptEntry>,
}

impl DialogueEngine {
    /// Start a session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&IntakeConfig::default())
    }

    /// Start a session, greeting the user as `config.bot_name`.
    pub fn with_config(config: &IntakeConfig) -> Self {
        let session_id = Uuid::new_v4();
        info!(session = %session_id, "Intake session started");
        Self {
            session_id,
            state: IntakeState::default(),
            transcript: vec![TranscriptEntry::bot(prompts::greeting(&config.bot_name))],
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The current step.
    pub fn step(&self) -> Step {
        self.state.step()
    }

    /// The conversation so far, oldest first.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Snapshot of the answers collected so far.
    pub fn profile(&self) -> Profile {
        self.state.profile()
    }

    /// Options to render under the latest prompt, if the step takes one.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        catalog::for_step(self.step())
    }

    /// The transcript as a JSON array of `{speaker, text}` objects.
    pub fn transcript_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.transcript)
    }

    /// Handle typed text.
    ///
    /// Blank input is dropped without a trace. Otherwise the text is recorded
    /// and handled by the current step. At the motivation step a thank-you
    /// gets the closing message.
    pub fn submit_text(&mut self, raw: &str) -> Turn {
        if raw.trim().is_empty() {
            debug!(session = %self.session_id, step = %self.step(), "Dropped empty input");
            return Turn::Dropped(IntakeError::EmptyInput);
        }

        self.transcript.push(TranscriptEntry::user(raw));

        let step = self.step();
        if step.is_terminal() && validate::is_gratitude(raw) {
            self.push_bot(prompts::CLOSING);
            info!(session = %self.session_id, "Closed conversation after thanks");
            return Turn::Closed;
        }

        match step {
            Step::Name => {
                let name = validate::extract_name(raw);
                self.push_bot(prompts::ask_email(&name));
                self.advance(name)
            }
            Step::Email => match validate::validate_email(raw) {
                Ok(()) => {
                    self.push_bot(prompts::ASK_PHONE);
                    self.advance(raw.to_string())
                }
                Err(e) => self.reject(e),
            },
            Step::Phone => match validate::validate_phone(raw) {
                Ok(()) => {
                    self.push_bot(prompts::ASK_JOB_TITLE);
                    self.advance(raw.to_string())
                }
                Err(e) => self.reject(e),
            },
            Step::JobTitle | Step::Motivation => {
                debug!(
                    session = %self.session_id,
                    step = %step,
                    "Ignored free text at option step"
                );
                Turn::Inert
            }
        }
    }

    /// Handle a picked option.
    ///
    /// The option is recorded in every step; only JobTitle and Motivation act
    /// on it. Each motivation pick appends a fresh recommendation.
    pub fn select_option(&mut self, option: &str) -> Turn {
        self.transcript.push(TranscriptEntry::user(option));

        match self.step() {
            Step::JobTitle => {
                self.push_bot(prompts::ASK_MOTIVATION);
                self.advance(option.to_string())
            }
            Step::Motivation => {
                let repick = self.state.has_recommendation();
                self.state.advance(option.to_string());
                let job_title = self.state.job_title().unwrap_or_default();
                let recommendation = rules::recommend(job_title, option);
                self.push_bot(recommendation.text());
                info!(
                    session = %self.session_id,
                    recommendation = ?recommendation,
                    repick,
                    "Recommendation given"
                );
                Turn::Recommended(recommendation)
            }
            step => {
                debug!(
                    session = %self.session_id,
                    step = %step,
                    "Ignored option at free-text step"
                );
                Turn::Inert
            }
        }
    }

    fn advance(&mut self, answer: String) -> Turn {
        let from = self.step();
        let to = self.state.advance(answer);
        info!(session = %self.session_id, from = %from, to = %to, "Intake step advanced");
        Turn::Advanced(to)
    }

    fn reject(&mut self, error: IntakeError) -> Turn {
        if let Some(reprompt) = error.reprompt() {
            self.push_bot(reprompt);
        }
        debug!(session = %self.session_id, step = %self.step(), %error, "Answer rejected");
        Turn::Rejected(error)
    }

    fn push_bot(&mut self, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry::bot(text));
    }
}

impl Default for DialogueEngine {
    fn default() -> Self {
        Self::new()
    }
}
