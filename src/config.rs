//! Configuration types.

use crate::error::ConfigError;

/// Intake assistant configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Name the assistant introduces itself with.
    pub bot_name: String,
    /// Header shown above the conversation.
    pub title: String,
    /// Print the collected profile when the session ends.
    pub show_profile: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            bot_name: "Tej".to_string(),
            title: "ESG & Sustainability Assistant".to_string(),
            show_profile: false,
        }
    }
}

impl IntakeConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bot_name = lookup("INTAKE_BOT_NAME")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.bot_name);

        let title = lookup("INTAKE_TITLE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.title);

        let show_profile = match lookup("INTAKE_SHOW_PROFILE") {
            Some(raw) => parse_bool("INTAKE_SHOW_PROFILE", &raw)?,
            None => defaults.show_profile,
        };

        Ok(Self {
            bot_name,
            title,
            show_profile,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected true or false, got {other:?}"),
        }),
    }
}
