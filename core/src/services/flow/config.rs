//! Configuration for the registration flow

use crate::domain::entities::code_input::CODE_LENGTH;
use crate::domain::entities::registration_session::MIN_PASSWORD_LENGTH;
use crate::domain::value_objects::resend_countdown::RESEND_COOLDOWN_SECONDS;

/// Configuration for the registration flow
#[derive(Debug, Clone)]
pub struct RegistrationFlowConfig {
    /// Minimum accepted password length
    pub min_password_length: usize,
    /// Required verification code length
    pub code_length: usize,
    /// Seconds between consecutive code-delivery requests
    pub resend_cooldown_seconds: u32,
}

impl Default for RegistrationFlowConfig {
    fn default() -> Self {
        Self {
            min_password_length: MIN_PASSWORD_LENGTH,
            code_length: CODE_LENGTH,
            resend_cooldown_seconds: RESEND_COOLDOWN_SECONDS,
        }
    }
}
