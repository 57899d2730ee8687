//! Normalized results returned by the external collaborators
//!
//! Every collaborator operation resolves to one of these result objects;
//! no exception crosses the flow boundary. Rejections travel in-band
//! (`success == false` plus an optional server message), while the `Err`
//! arm of a collaborator call is reserved for transport failures.

use serde::{Deserialize, Serialize};

/// Two-factor enrollment data returned by the backend
///
/// The secret seeds a time-based one-time-password generator. The
/// enrollment URI (`otpauth://totp/...`) is the scannable form of the same
/// secret; QR rendering and copy-to-clipboard are presentation concerns of
/// the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpProvisioning {
    /// Shared secret, shown once to the user as text
    pub secret: String,
    /// Scannable enrollment URI
    pub enrollment_uri: String,
}

/// Result of `AuthGateway::register`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterOutcome {
    /// Whether the backend accepted the registration
    pub success: bool,
    /// Backend-assigned user id, present on success
    pub user_id: Option<String>,
    /// Server-provided failure message, surfaced verbatim when present
    pub message: Option<String>,
    /// Two-factor provisioning data; `Some` is the capability flag that
    /// selects the two-factor flow variant
    pub provisioning: Option<OtpProvisioning>,
}

impl RegisterOutcome {
    /// Successful registration without two-factor enrollment
    pub fn accepted(user_id: impl Into<String>) -> Self {
        Self {
            success: true,
            user_id: Some(user_id.into()),
            message: None,
            provisioning: None,
        }
    }

    /// Successful registration with two-factor enrollment data
    pub fn accepted_with_otp(user_id: impl Into<String>, provisioning: OtpProvisioning) -> Self {
        Self {
            success: true,
            user_id: Some(user_id.into()),
            message: None,
            provisioning: Some(provisioning),
        }
    }

    /// Rejected registration with an optional server message
    pub fn rejected(message: Option<String>) -> Self {
        Self {
            success: false,
            user_id: None,
            message,
            provisioning: None,
        }
    }
}

/// Result of `AuthGateway::complete_registration`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteOutcome {
    /// Whether the code was accepted and the registration completed
    pub success: bool,
    /// Server-provided failure message, surfaced verbatim when present
    pub message: Option<String>,
}

impl CompleteOutcome {
    /// Accepted completion
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Rejected completion with an optional server message
    pub fn rejected(message: Option<String>) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Result of `CodeDelivery::resend_code`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResendOutcome {
    /// Whether the delivery endpoint accepted the resend request
    pub accepted: bool,
    /// Error text from the response body, surfaced verbatim when present
    pub error: Option<String>,
}

impl ResendOutcome {
    /// Accepted resend request
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            error: None,
        }
    }

    /// Rejected resend request with an optional response error
    pub fn rejected(error: Option<String>) -> Self {
        Self {
            accepted: false,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_outcome_carries_user_id() {
        let outcome = RegisterOutcome::accepted("u1");
        assert!(outcome.success);
        assert_eq!(outcome.user_id.as_deref(), Some("u1"));
        assert!(outcome.provisioning.is_none());
    }

    #[test]
    fn test_otp_outcome_carries_provisioning() {
        let outcome = RegisterOutcome::accepted_with_otp(
            "u1",
            OtpProvisioning {
                secret: "ABC".to_string(),
                enrollment_uri: "otpauth://totp/FluxTrader:a@b.c?secret=ABC".to_string(),
            },
        );
        let provisioning = outcome.provisioning.expect("provisioning present");
        assert_eq!(provisioning.secret, "ABC");
        assert!(provisioning.enrollment_uri.starts_with("otpauth://"));
    }

    #[test]
    fn test_rejected_outcomes() {
        let outcome = RegisterOutcome::rejected(Some("email taken".to_string()));
        assert!(!outcome.success);
        assert!(outcome.user_id.is_none());
        assert_eq!(outcome.message.as_deref(), Some("email taken"));

        let resend = ResendOutcome::rejected(None);
        assert!(!resend.accepted);
        assert!(resend.error.is_none());
    }
}
