//! HTTP implementation of the auth gateway

use async_trait::async_trait;
use tracing::{debug, error};

use flux_core::domain::value_objects::auth_outcome::{CompleteOutcome, RegisterOutcome};
use flux_core::services::flow::AuthGatewayTrait;

use crate::error::ClientError;
use super::dto::{
    CompleteRegistrationRequest, CompleteRegistrationResponse, RegisterRequest, RegisterResponse,
};

/// Auth service client for the register and complete-registration
/// endpoints
///
/// Rejections travel in-band inside the response body (`success: false`
/// plus an optional message), for any HTTP status; only connection
/// failures and uninterpretable bodies surface as errors, which the flow
/// maps to its generic network-error message.
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthGateway {
    /// Creates a gateway against the given base URL (e.g. `https://api.fluxtrader.app`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a gateway reusing an existing HTTP client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post_register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<RegisterOutcome, ClientError> {
        let url = format!("{}/api/register", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&RegisterRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), event = "register_response", "Received register response");

        match serde_json::from_str::<RegisterResponse>(&text) {
            Ok(body) => Ok(body.into()),
            Err(_) if !status.is_success() => Err(ClientError::UnexpectedStatus(status.as_u16())),
            Err(e) => Err(ClientError::MalformedResponse(e.to_string())),
        }
    }

    async fn post_complete(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<CompleteOutcome, ClientError> {
        let url = format!("{}/api/complete-registration", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CompleteRegistrationRequest { user_id, code })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), event = "complete_response", "Received completion response");

        match serde_json::from_str::<CompleteRegistrationResponse>(&text) {
            Ok(body) => Ok(body.into()),
            Err(_) if !status.is_success() => Err(ClientError::UnexpectedStatus(status.as_u16())),
            Err(e) => Err(ClientError::MalformedResponse(e.to_string())),
        }
    }
}

#[async_trait]
impl AuthGatewayTrait for HttpAuthGateway {
    async fn register(&self, email: &str, password: &str) -> Result<RegisterOutcome, String> {
        self.post_register(email, password).await.map_err(|e| {
            error!(error = %e, event = "register_transport_failure", "Register request failed");
            e.to_string()
        })
    }

    async fn complete_registration(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<CompleteOutcome, String> {
        self.post_complete(user_id, code).await.map_err(|e| {
            error!(error = %e, event = "complete_transport_failure", "Completion request failed");
            e.to_string()
        })
    }
}
