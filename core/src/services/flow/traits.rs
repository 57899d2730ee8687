//! Traits for the external collaborators of the registration flow
//!
//! The `Err` arm of every operation means transport failure (endpoint
//! unreachable or malformed response). In-band rejections travel inside
//! the outcome objects.

use async_trait::async_trait;

use crate::domain::value_objects::auth_outcome::{
    CompleteOutcome, RegisterOutcome, ResendOutcome,
};

/// Trait for the authentication service integration
#[async_trait]
pub trait AuthGatewayTrait: Send + Sync {
    /// Create an account for the given credentials
    async fn register(&self, email: &str, password: &str) -> Result<RegisterOutcome, String>;
    /// Submit a verification code to finish the registration
    async fn complete_registration(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<CompleteOutcome, String>;
}

/// Trait for the code-delivery endpoint integration
#[async_trait]
pub trait CodeDeliveryTrait: Send + Sync {
    /// Re-trigger delivery of the verification code for a pending user
    async fn resend_code(&self, user_id: &str) -> Result<ResendOutcome, String>;
}
