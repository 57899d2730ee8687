//! Registration session entity and flow step state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::code_input::CodeInput;
use crate::domain::value_objects::auth_outcome::OtpProvisioning;
use crate::domain::value_objects::resend_countdown::ResendCountdown;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Current position in the registration flow
///
/// The step is a tagged variant so that illegal combinations are
/// unrepresentable: a user id exists exactly when the flow has advanced
/// past [`FlowStep::Register`], and two-factor provisioning data can only
/// exist inside the verify-email step that displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowStep {
    /// Collecting email, password, and confirmation
    Register,
    /// Email verification; carries two-factor provisioning data when the
    /// backend enabled OTP enrollment for this account
    VerifyEmail {
        user_id: String,
        provisioning: Option<OtpProvisioning>,
    },
    /// OTP code entry (two-factor variant only)
    VerifyOtp { user_id: String },
    /// The flow finished; control belongs to the external session layer
    Completed { user_id: String },
}

impl FlowStep {
    /// User id assigned by the backend, present once past `Register`
    pub fn user_id(&self) -> Option<&str> {
        match self {
            FlowStep::Register => None,
            FlowStep::VerifyEmail { user_id, .. }
            | FlowStep::VerifyOtp { user_id }
            | FlowStep::Completed { user_id } => Some(user_id),
        }
    }

    /// Short state name for logging
    pub fn name(&self) -> &'static str {
        match self {
            FlowStep::Register => "register",
            FlowStep::VerifyEmail { .. } => "verify-email",
            FlowStep::VerifyOtp { .. } => "verify-otp",
            FlowStep::Completed { .. } => "completed",
        }
    }
}

impl Default for FlowStep {
    fn default() -> Self {
        FlowStep::Register
    }
}

/// Ephemeral state of one registration attempt
///
/// The session is created when the registration screen mounts and is
/// discarded on navigation away or successful completion. It is owned
/// exclusively by the flow instance and never shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationSession {
    /// Correlation id for logging
    pub id: Uuid,

    /// Email address entered by the user
    pub email: String,

    /// Password entered by the user
    pub password: String,

    /// Password confirmation entered by the user
    pub confirm_password: String,

    /// Verification code input (digits only, at most 6)
    pub code: CodeInput,

    /// Current flow step
    pub step: FlowStep,

    /// Resend cooldown; resend is allowed only when elapsed
    pub countdown: ResendCountdown,

    /// Last user-visible failure message, cleared on each new attempt
    pub error: Option<String>,

    /// True while a request is in flight, preventing duplicate submission
    pub loading: bool,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
}

impl RegistrationSession {
    /// Creates a fresh session in the initial `Register` step
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            code: CodeInput::new(),
            step: FlowStep::Register,
            countdown: ResendCountdown::idle(),
            error: None,
            loading: false,
            created_at: Utc::now(),
        }
    }

    /// User id assigned by the backend, if the flow has advanced past
    /// registration
    pub fn user_id(&self) -> Option<&str> {
        self.step.user_id()
    }

    /// Two-factor provisioning data, present only in the two-factor
    /// verify-email variant
    pub fn otp_provisioning(&self) -> Option<&OtpProvisioning> {
        match &self.step {
            FlowStep::VerifyEmail {
                provisioning: Some(p),
                ..
            } => Some(p),
            _ => None,
        }
    }

    /// Whether the flow reached successful completion
    pub fn is_complete(&self) -> bool {
        matches!(self.step, FlowStep::Completed { .. })
    }
}

impl Default for RegistrationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_register() {
        let session = RegistrationSession::new();
        assert_eq!(session.step, FlowStep::Register);
        assert!(session.user_id().is_none());
        assert!(session.otp_provisioning().is_none());
        assert!(session.countdown.is_elapsed());
        assert!(!session.loading);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_user_id_present_past_register() {
        let step = FlowStep::VerifyEmail {
            user_id: "u1".to_string(),
            provisioning: None,
        };
        assert_eq!(step.user_id(), Some("u1"));
        assert_eq!(FlowStep::Register.user_id(), None);
    }

    #[test]
    fn test_otp_provisioning_only_in_two_factor_variant() {
        let mut session = RegistrationSession::new();
        session.step = FlowStep::VerifyEmail {
            user_id: "u1".to_string(),
            provisioning: Some(OtpProvisioning {
                secret: "ABC".to_string(),
                enrollment_uri: "otpauth://totp/x".to_string(),
            }),
        };
        assert!(session.otp_provisioning().is_some());

        session.step = FlowStep::VerifyOtp {
            user_id: "u1".to_string(),
        };
        assert!(session.otp_provisioning().is_none());
    }

    #[test]
    fn test_step_names() {
        assert_eq!(FlowStep::Register.name(), "register");
        assert_eq!(
            FlowStep::Completed {
                user_id: "u1".to_string()
            }
            .name(),
            "completed"
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let session = RegistrationSession::new();
        let json = serde_json::to_string(&session).unwrap();
        let restored: RegistrationSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.step, FlowStep::Register);
        assert_eq!(restored.id, session.id);
    }
}
