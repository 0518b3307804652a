#![allow(clippy::unwrap_used)]

use classroom_bots::error::BotError;
use classroom_bots::store::ClassRoster;
use classroom_bots::utils::validation::validate_class_choice;
use classroom_bots::utils::feedback::{describe_error, format_feedback, suggestion_for, FeedbackType};

#[cfg(test)]
mod feedback_system_tests {
    use super::*;

    #[test]
    fn test_feedback_message_formatting() {
        let test_cases = vec![
            (FeedbackType::Success, "Operation completed", "✅"),
            (FeedbackType::Warning, "Potential issue detected", "⚠️"),
            (FeedbackType::Error, "Operation failed", "❌"),
            (FeedbackType::Info, "Information message", "ℹ️"),
        ];

        for (feedback_type, message, expected_emoji) in test_cases {
            let formatted = format_feedback(feedback_type, message);
            assert_eq!(formatted, format!("{expected_emoji} {message}"));
        }
    }

    #[test]
    fn test_every_lookup_miss_has_a_suggestion() {
        let errors = [
            BotError::MissingUsername,
            BotError::UnregisteredStudent("bob".to_string()),
            BotError::NoActiveSession("XII-A".to_string()),
            BotError::MissingChatIdentity("bob".to_string()),
            BotError::UnknownClass("X".to_string()),
        ];

        for error in errors {
            assert!(suggestion_for(&error).is_some(), "no suggestion for {error:?}");
            assert!(describe_error(&error).starts_with("⚠️ "));
        }
    }

    #[test]
    fn test_quadratic_error_suggests_usage() {
        let text = describe_error(&BotError::InvalidInput("Expected 3 coefficients, got 2".to_string()));
        assert!(text.contains("Expected 3 coefficients, got 2"));
        assert!(text.contains("/quadratic <a> <b> <c>"));
    }

    #[test]
    fn test_empty_class_choice_points_at_keyboard() {
        let error = validate_class_choice(&ClassRoster::builtin(), "").unwrap_err();
        let text = describe_error(&error);

        assert_eq!(
            text,
            "⚠️ Class name cannot be empty\n\n💡 Suggestion: Pick one of the classes on the keyboard, or /cancel."
        );
        assert!(!text.contains("/quadratic"));
    }

    #[test]
    fn test_transient_errors_render_as_errors() {
        let text = describe_error(&BotError::Upstream("timeout".to_string()));
        assert_eq!(text, "❌ Upstream request failed: timeout");
    }
}
