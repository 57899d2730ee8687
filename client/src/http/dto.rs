//! Wire DTOs for the auth and code-delivery endpoints
//!
//! Field names follow the backend's JSON exactly: the auth endpoints use
//! camelCase (`userID`, `otpSecret`, `qrCodeURL`), the code-delivery
//! endpoint uses snake_case (`user_id`). Optional fields tolerate absence.

use serde::{Deserialize, Serialize};

use flux_core::domain::value_objects::auth_outcome::{
    CompleteOutcome, OtpProvisioning, RegisterOutcome,
};

/// Request body for POST /api/register
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response body of POST /api/register
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "userID", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "otpSecret", default)]
    pub otp_secret: Option<String>,
    #[serde(rename = "qrCodeURL", default)]
    pub qr_code_url: Option<String>,
}

impl From<RegisterResponse> for RegisterOutcome {
    fn from(body: RegisterResponse) -> Self {
        // Both OTP fields must be present for the two-factor variant
        let provisioning = match (body.otp_secret, body.qr_code_url) {
            (Some(secret), Some(enrollment_uri)) => Some(OtpProvisioning {
                secret,
                enrollment_uri,
            }),
            _ => None,
        };
        RegisterOutcome {
            success: body.success,
            user_id: body.user_id,
            message: body.message,
            provisioning,
        }
    }
}

/// Request body for POST /api/complete-registration
#[derive(Debug, Serialize)]
pub struct CompleteRegistrationRequest<'a> {
    pub user_id: &'a str,
    pub code: &'a str,
}

/// Response body of POST /api/complete-registration
#[derive(Debug, Deserialize)]
pub struct CompleteRegistrationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<CompleteRegistrationResponse> for CompleteOutcome {
    fn from(body: CompleteRegistrationResponse) -> Self {
        CompleteOutcome {
            success: body.success,
            message: body.message,
        }
    }
}

/// Request body for POST /api/send-email-code
#[derive(Debug, Serialize)]
pub struct SendEmailCodeRequest<'a> {
    pub user_id: &'a str,
}

/// Response body of POST /api/send-email-code
#[derive(Debug, Deserialize)]
pub struct SendEmailCodeResponse {
    #[serde(default)]
    pub error: Option<String>,
}
