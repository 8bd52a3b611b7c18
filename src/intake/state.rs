//! Intake state machine — tracks which step the user is in and the answers
//! collected so far.

use serde::{Deserialize, Serialize};

use super::model::Profile;

/// The steps of the intake conversation.
///
/// Progresses linearly: Name → Email → Phone → JobTitle → Motivation.
/// Motivation is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Name,
    Email,
    Phone,
    JobTitle,
    Motivation,
}

impl Step {
    /// Motivation is the last step; the session stays there once reached.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Motivation)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Name
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::JobTitle => "job_title",
            Self::Motivation => "motivation",
        };
        write!(f, "{s}")
    }
}

/// Contact details gathered by the free-text steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Session state: one variant per step, carrying only the answers that
/// step can have.
///
/// A value for a later step can't exist while an earlier step is current.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IntakeState {
    #[default]
    Name,
    Email {
        name: String,
    },
    Phone {
        name: String,
        email: String,
    },
    JobTitle {
        contact: Contact,
    },
    Motivation {
        contact: Contact,
        job_title: String,
        /// Latest motivation picked. `None` until the first pick.
        motivation: Option<String>,
    },
}

impl IntakeState {
    /// The current step.
    pub fn step(&self) -> Step {
        match self {
            Self::Name => Step::Name,
            Self::Email { .. } => Step::Email,
            Self::Phone { .. } => Step::Phone,
            Self::JobTitle { .. } => Step::JobTitle,
            Self::Motivation { .. } => Step::Motivation,
        }
    }

    /// Record the answer for the current step and move on.
    ///
    /// On the terminal step the answer replaces the previous motivation and
    /// the step stays put. Returns the step the state is in afterwards.
    pub fn advance(&mut self, answer: String) -> Step {
        *self = match std::mem::take(self) {
            Self::Name => Self::Email { name: answer },
            Self::Email { name } => Self::Phone {
                name,
                email: answer,
            },
            Self::Phone { name, email } => Self::JobTitle {
                contact: Contact {
                    name,
                    email,
                    phone: answer,
                },
            },
            Self::JobTitle { contact } => Self::Motivation {
                contact,
                job_title: answer,
                motivation: None,
            },
            Self::Motivation {
                contact, job_title, ..
            } => Self::Motivation {
                contact,
                job_title,
                motivation: Some(answer),
            },
        };
        self.step()
    }

    /// Job title chosen so far, if the JobTitle step is complete.
    pub fn job_title(&self) -> Option<&str> {
        match self {
            Self::Motivation { job_title, .. } => Some(job_title),
            _ => None,
        }
    }

    /// Whether a motivation has been picked (a recommendation was given).
    pub fn has_recommendation(&self) -> bool {
        matches!(
            self,
            Self::Motivation {
                motivation: Some(_),
                ..
            }
        )
    }

    /// Flatten the collected answers into a `Profile`. Missing answers are
    /// empty strings.
    pub fn profile(&self) -> Profile {
        let mut profile = Profile::default();
        match self {
            Self::Name => {}
            Self::Email { name } => {
                profile.name = name.clone();
            }
            Self::Phone { name, email } => {
                profile.name = name.clone();
                profile.email = email.clone();
            }
            Self::JobTitle { contact } => {
                profile.fill_contact(contact);
            }
            Self::Motivation {
                contact,
                job_title,
                motivation,
            } => {
                profile.fill_contact(contact);
                profile.job_title = job_title.clone();
                profile.motivation = motivation.clone().unwrap_or_default();
            }
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_motivation_is_terminal() {
        use Step::*;
        assert!(Motivation.is_terminal());
        for step in [Name, Email, Phone, JobTitle] {
            assert!(!step.is_terminal());
        }
    }

    #[test]
    fn display_matches_serde() {
        use Step::*;
        for step in [Name, Email, Phone, JobTitle, Motivation] {
            let display = format!("{step}");
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(format!("\"{display}\""), json, "mismatch for {step:?}");
        }
    }

    #[test]
    fn advance_walks_all_steps_in_order() {
        let mut state = IntakeState::default();
        assert_eq!(state.step(), Step::Name);

        let answers = ["Ada", "ada@example.com", "555 123 4567", "Founder/CEO"];
        let expected = [Step::Email, Step::Phone, Step::JobTitle, Step::Motivation];
        for (answer, step) in answers.into_iter().zip(expected) {
            assert_eq!(state.advance(answer.to_string()), step);
        }
        assert_eq!(state.step(), Step::Motivation);
        assert!(!state.has_recommendation());
    }

    #[test]
    fn terminal_advance_replaces_motivation() {
        let mut state = IntakeState::Motivation {
            contact: Contact {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: "5551234567".into(),
            },
            job_title: "Student".into(),
            motivation: None,
        };

        assert_eq!(state.advance("first".into()), Step::Motivation);
        assert_eq!(state.profile().motivation, "first");
        assert_eq!(state.advance("second".into()), Step::Motivation);
        assert_eq!(state.profile().motivation, "second");
        assert!(state.has_recommendation());
        assert_eq!(state.job_title(), Some("Student"));
    }

    #[test]
    fn profile_fields_follow_step() {
        let mut state = IntakeState::default();
        assert_eq!(state.profile(), Profile::default());

        state.advance("Ada".into());
        let profile = state.profile();
        assert_eq!(profile.name, "Ada");
        assert!(profile.email.is_empty());

        state.advance("ada@example.com".into());
        state.advance("(555) 123-4567".into());
        let profile = state.profile();
        assert_eq!(profile.phone, "(555) 123-4567");
        assert!(profile.job_title.is_empty());
        assert!(state.job_title().is_none());
    }
}
