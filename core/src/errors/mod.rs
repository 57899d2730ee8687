//! Flow error types and user-visible message mapping.

mod types;

pub use types::{FlowError, ValidationError};

use flux_shared::i18n::{message, MessageKey};
use flux_shared::Language;

pub type FlowResult<T> = Result<T, FlowError>;

/// Maps a flow error to the localized message shown to the user
///
/// Server-provided rejection messages pass through verbatim; everything
/// else resolves against the shared catalog. Transport failures never leak
/// the raw error text to the user.
pub fn user_message(error: &FlowError, lang: Language) -> String {
    match error {
        FlowError::Validation(ValidationError::PasswordMismatch) => {
            message(MessageKey::PasswordMismatch, lang).to_string()
        }
        FlowError::Validation(ValidationError::PasswordTooShort { .. }) => {
            message(MessageKey::PasswordTooShort, lang).to_string()
        }
        FlowError::Rejected {
            message: Some(text),
        } => text.clone(),
        FlowError::Rejected { message: None } => {
            message(MessageKey::RegistrationFailed, lang).to_string()
        }
        FlowError::Transport { .. } => message(MessageKey::NetworkError, lang).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_localized() {
        let error = FlowError::Validation(ValidationError::PasswordMismatch);
        assert_eq!(
            user_message(&error, Language::English),
            "Passwords do not match"
        );
        assert_eq!(
            user_message(&error, Language::Chinese),
            "两次输入的密码不一致"
        );
    }

    #[test]
    fn test_server_rejection_message_passes_through_verbatim() {
        let error = FlowError::Rejected {
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(
            user_message(&error, Language::Chinese),
            "Email already registered"
        );
    }

    #[test]
    fn test_rejection_without_message_uses_default() {
        let error = FlowError::Rejected { message: None };
        assert_eq!(
            user_message(&error, Language::English),
            "Registration failed. Please try again"
        );
    }

    #[test]
    fn test_transport_failure_never_leaks_raw_error() {
        let error = FlowError::Transport {
            message: "connection refused (os error 111)".to_string(),
        };
        let text = user_message(&error, Language::English);
        assert_eq!(text, "Network error. Please try again later");
        assert!(!text.contains("os error"));
    }
}
