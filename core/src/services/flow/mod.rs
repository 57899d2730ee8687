//! Registration flow module
//!
//! This module drives a user through account creation, optional two-factor
//! enrollment, and delivery-code verification:
//! - Local password validation before any network call
//! - Registration via the auth gateway
//! - Email verification in an email-only and a two-factor variant
//! - Code resend with a 60-second cooldown
//! - Normalized, localized failure messages

mod config;
mod email_utils;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::RegistrationFlowConfig;
pub use email_utils::mask_email;
pub use service::RegistrationFlow;
pub use traits::{AuthGatewayTrait, CodeDeliveryTrait};
