//! Value objects for the registration flow

pub mod auth_outcome;
pub mod resend_countdown;

pub use auth_outcome::{CompleteOutcome, OtpProvisioning, RegisterOutcome, ResendOutcome};
pub use resend_countdown::{ResendCountdown, RESEND_COOLDOWN_SECONDS};
