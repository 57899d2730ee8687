//! User-visible message catalog for the registration flow
//!
//! Messages are keyed by [`MessageKey`] and resolved against a
//! [`Language`]. The catalog is embedded; the presentation shell decides
//! which language to request.

use crate::types::language::Language;

/// Keys for the user-visible flow messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Password and confirmation do not match
    PasswordMismatch,
    /// Password shorter than the minimum length
    PasswordTooShort,
    /// Registration or completion rejected without a server message
    RegistrationFailed,
    /// Code resend rejected without a server message
    ResendFailed,
    /// Transport failure (endpoint unreachable or malformed response)
    NetworkError,
}

/// Resolve a message key to the localized user-visible text
pub fn message(key: MessageKey, lang: Language) -> &'static str {
    match (key, lang) {
        (MessageKey::PasswordMismatch, Language::English) => "Passwords do not match",
        (MessageKey::PasswordMismatch, Language::Chinese) => "两次输入的密码不一致",
        (MessageKey::PasswordTooShort, Language::English) => {
            "Password must be at least 6 characters"
        }
        (MessageKey::PasswordTooShort, Language::Chinese) => "密码长度至少为6位",
        (MessageKey::RegistrationFailed, Language::English) => {
            "Registration failed. Please try again"
        }
        (MessageKey::RegistrationFailed, Language::Chinese) => "注册失败，请重试",
        (MessageKey::ResendFailed, Language::English) => "Retransmission failed",
        (MessageKey::ResendFailed, Language::Chinese) => "重新发送失败",
        (MessageKey::NetworkError, Language::English) => {
            "Network error. Please try again later"
        }
        (MessageKey::NetworkError, Language::Chinese) => "网络错误，请稍后重试",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_both_languages() {
        let keys = [
            MessageKey::PasswordMismatch,
            MessageKey::PasswordTooShort,
            MessageKey::RegistrationFailed,
            MessageKey::ResendFailed,
            MessageKey::NetworkError,
        ];
        for key in keys {
            assert!(!message(key, Language::English).is_empty());
            assert!(!message(key, Language::Chinese).is_empty());
        }
    }

    #[test]
    fn test_network_error_localized() {
        assert_eq!(
            message(MessageKey::NetworkError, Language::English),
            "Network error. Please try again later"
        );
        assert_eq!(
            message(MessageKey::NetworkError, Language::Chinese),
            "网络错误，请稍后重试"
        );
    }
}
