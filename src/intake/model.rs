//! Profile, transcript, and option catalog models.

use serde::{Deserialize, Serialize};

use super::state::{Contact, Step};

/// Answers collected during one intake session.
///
/// A field is non-empty exactly when its step has been completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub motivation: String,
}

impl Profile {
    pub(crate) fn fill_contact(&mut self, contact: &Contact) {
        self.name = contact.name.clone();
        self.email = contact.email.clone();
        self.phone = contact.phone.clone();
    }

    /// Render the collected fields as a markdown list. Empty fields are
    /// left out.
    pub fn summary(&self) -> String {
        let mut parts = vec!["# Intake Profile".to_string()];

        let fields = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Job title", &self.job_title),
            ("Motivation", &self.motivation),
        ];
        for (label, value) in fields {
            if !value.is_empty() {
                parts.push(format!("- **{label}:** {value}"));
            }
        }

        parts.join("\n")
    }
}

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Bot,
    User,
}

/// One line of the conversation, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }
}

/// Fixed option lists offered at the JobTitle and Motivation steps.
pub mod catalog {
    use super::Step;

    pub const STUDENT: &str = "Student";
    pub const ESG_PROFESSIONAL: &str = "ESG professional in a company";
    pub const FOUNDER_CEO: &str = "Founder/CEO";
    pub const ESG_ENTHUSIAST: &str = "ESG enthusiast";
    pub const OTHERS: &str = "Others";

    pub const BASIC_UNDERSTANDING: &str =
        "I want to get a basic understanding of how ESG works in business";
    pub const CUSTOMER_DOCUMENT: &str =
        "My customer has given me an ESG related document to sign/fill";
    pub const IMPLEMENT_ESG: &str =
        "I want to implement ESG/sustainability in my company and I dont know where to start";
    pub const CALCULATE_GHG: &str = "I want to calculate my GHG Emissions";
    pub const NONE_OF_THE_ABOVE: &str = "None of the above";

    /// Job-title options, in display order.
    pub const JOB_TITLES: [&str; 5] = [
        STUDENT,
        ESG_PROFESSIONAL,
        FOUNDER_CEO,
        ESG_ENTHUSIAST,
        OTHERS,
    ];

    /// Motivation options, in display order.
    pub const MOTIVATIONS: [&str; 5] = [
        BASIC_UNDERSTANDING,
        CUSTOMER_DOCUMENT,
        IMPLEMENT_ESG,
        CALCULATE_GHG,
        NONE_OF_THE_ABOVE,
    ];

    /// Options offered at `step`, or `None` for free-text steps.
    pub fn for_step(step: Step) -> Option<&'static [&'static str]> {
        match step {
            Step::JobTitle => Some(&JOB_TITLES),
            Step::Motivation => Some(&MOTIVATIONS),
            Step::Name | Step::Email | Step::Phone => None,
        }
    }
}
