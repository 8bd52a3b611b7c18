//! Fixed Bot messages used by the intake conversation.

/// Re-prompt after an email that doesn't look like `local@domain.tld`.
pub const INVALID_EMAIL: &str = "Please enter a valid email address (e.g., name@example.com)";

/// Re-prompt after a phone number without 7-15 digits.
pub const INVALID_PHONE: &str =
    "Please enter a valid phone number (7-15 digits, can include spaces, dashes, or parentheses)";

pub const ASK_PHONE: &str = "Great! And what's your phone number?";

pub const ASK_JOB_TITLE: &str = "What is your job title?";

pub const ASK_MOTIVATION: &str = "Which of these best describes you?";

/// Reply to a thank-you once the conversation has reached the motivation step.
pub const CLOSING: &str = "You're welcome! I'm here to help you on your sustainability journey. \
Feel free to reach out if you have any questions about ESG or sustainability. \
Together, we can make a difference! 🌱";

/// Opening message asking for the user's name.
pub fn greeting(bot_name: &str) -> String {
    format!("Hello! I'm {bot_name}. What's your name?")
}

/// Acknowledge the name and ask for an email address.
pub fn ask_email(name: &str) -> String {
    format!("Nice to meet you, {name}! What's your email address?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_uses_bot_name() {
        assert_eq!(greeting("Tej"), "Hello! I'm Tej. What's your name?");
    }

    #[test]
    fn ask_email_uses_name() {
        let prompt = ask_email("John Smith");
        assert!(prompt.starts_with("Nice to meet you, John Smith!"));
        assert!(prompt.contains("email"));
    }

    #[test]
    fn option_prompts_are_distinct() {
        assert!(ASK_JOB_TITLE.contains("job title"));
        assert!(ASK_MOTIVATION.contains("best describes you"));
    }
}
