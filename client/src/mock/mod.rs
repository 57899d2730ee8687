//! Mock collaborator implementations
//!
//! Mock versions of the auth gateway and the code-delivery endpoint for
//! development and testing without a backend. They log what a real
//! backend would do and track call counts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use flux_core::domain::entities::code_input::CODE_LENGTH;
use flux_core::domain::value_objects::auth_outcome::{
    CompleteOutcome, OtpProvisioning, RegisterOutcome, ResendOutcome,
};
use flux_core::services::flow::{AuthGatewayTrait, CodeDeliveryTrait};

/// Fixed base32 secret issued by the mock gateway
const MOCK_OTP_SECRET: &str = "JBSWY3DPEHPK3PXP";

/// Mock auth gateway for development and testing
#[derive(Clone)]
pub struct MockAuthGateway {
    /// Counter for registered accounts, also used to mint user ids
    registration_count: Arc<AtomicU64>,
    /// Whether registered accounts get two-factor provisioning data
    two_factor: bool,
    /// Whether to simulate transport failures
    simulate_failure: bool,
}

impl MockAuthGateway {
    /// Creates a mock gateway in the email-only variant
    pub fn new() -> Self {
        Self::with_options(false, false)
    }

    /// Creates a mock gateway with configurable options
    pub fn with_options(two_factor: bool, simulate_failure: bool) -> Self {
        Self {
            registration_count: Arc::new(AtomicU64::new(0)),
            two_factor,
            simulate_failure,
        }
    }

    /// Number of accounts registered through this mock
    pub fn registration_count(&self) -> u64 {
        self.registration_count.load(Ordering::SeqCst)
    }
}

impl Default for MockAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGatewayTrait for MockAuthGateway {
    async fn register(&self, email: &str, _password: &str) -> Result<RegisterOutcome, String> {
        if self.simulate_failure {
            return Err("simulated transport failure".to_string());
        }

        let n = self.registration_count.fetch_add(1, Ordering::SeqCst) + 1;
        let user_id = format!("mock-user-{}", n);
        info!(
            user_id = %user_id,
            two_factor = self.two_factor,
            event = "mock_register",
            "Mock gateway registered an account"
        );

        if self.two_factor {
            Ok(RegisterOutcome::accepted_with_otp(
                user_id,
                OtpProvisioning {
                    secret: MOCK_OTP_SECRET.to_string(),
                    enrollment_uri: format!(
                        "otpauth://totp/FluxTrader:{}?secret={}&issuer=FluxTrader",
                        email, MOCK_OTP_SECRET
                    ),
                },
            ))
        } else {
            Ok(RegisterOutcome::accepted(user_id))
        }
    }

    async fn complete_registration(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<CompleteOutcome, String> {
        if self.simulate_failure {
            return Err("simulated transport failure".to_string());
        }

        // The mock accepts any full-length digit code
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Ok(CompleteOutcome::rejected(Some(
                "Invalid verification code format".to_string(),
            )));
        }

        info!(
            user_id = %user_id,
            event = "mock_complete_registration",
            "Mock gateway completed a registration"
        );
        Ok(CompleteOutcome::accepted())
    }
}

/// Mock code-delivery endpoint for development and testing
#[derive(Clone)]
pub struct MockCodeDelivery {
    /// Counter for delivery requests
    send_count: Arc<AtomicU64>,
    /// Whether to simulate transport failures
    simulate_failure: bool,
}

impl MockCodeDelivery {
    /// Creates a mock delivery endpoint that accepts every request
    pub fn new() -> Self {
        Self::with_options(false)
    }

    /// Creates a mock delivery endpoint with configurable options
    pub fn with_options(simulate_failure: bool) -> Self {
        Self {
            send_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
        }
    }

    /// Number of deliveries requested through this mock
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }
}

impl Default for MockCodeDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeDeliveryTrait for MockCodeDelivery {
    async fn resend_code(&self, user_id: &str) -> Result<ResendOutcome, String> {
        if self.simulate_failure {
            return Err("simulated transport failure".to_string());
        }

        self.send_count.fetch_add(1, Ordering::SeqCst);
        info!(
            user_id = %user_id,
            event = "mock_resend",
            "Mock delivery endpoint re-sent a verification code"
        );
        Ok(ResendOutcome::accepted())
    }
}
