//! Error types for the intake assistant.

use crate::intake::prompts;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Terminal front-end errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize transcript: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Domain-level rejections raised while collecting answers.
///
/// None of these are fatal. `EmptyInput` is dropped silently; the format
/// errors are answered with a re-prompt and the step is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid email address format")]
    InvalidEmailFormat,

    #[error("Invalid phone number format")]
    InvalidPhoneFormat,
}

impl IntakeError {
    /// The Bot message shown to the user for this rejection, if any.
    pub fn reprompt(&self) -> Option<&'static str> {
        match self {
            Self::EmptyInput => None,
            Self::InvalidEmailFormat => Some(prompts::INVALID_EMAIL),
            Self::InvalidPhoneFormat => Some(prompts::INVALID_PHONE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_reprompt() {
        assert!(IntakeError::EmptyInput.reprompt().is_none());
    }

    #[test]
    fn format_errors_carry_hints() {
        let email = IntakeError::InvalidEmailFormat.reprompt().unwrap();
        assert!(email.contains("name@example.com"));

        let phone = IntakeError::InvalidPhoneFormat.reprompt().unwrap();
        assert!(phone.contains("7-15 digits"));
    }

    #[test]
    fn config_error_names_the_key() {
        let err = ConfigError::InvalidValue {
            key: "INTAKE_SHOW_PROFILE".into(),
            message: "expected true or false".into(),
        };
        assert!(err.to_string().contains("INTAKE_SHOW_PROFILE"));
    }
}
