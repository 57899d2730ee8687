//! HTTP implementation of the code-delivery endpoint

use async_trait::async_trait;
use tracing::{debug, error};

use flux_core::domain::value_objects::auth_outcome::ResendOutcome;
use flux_core::services::flow::CodeDeliveryTrait;

use crate::error::ClientError;
use super::dto::{SendEmailCodeRequest, SendEmailCodeResponse};

/// Client for POST /api/send-email-code
///
/// A 2xx status means the resend was accepted. A failure status with a
/// parseable `{ "error": ... }` body is an in-band rejection; anything
/// else is a transport failure.
#[derive(Debug, Clone)]
pub struct HttpCodeDelivery {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCodeDelivery {
    /// Creates a delivery client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a delivery client reusing an existing HTTP client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post_resend(&self, user_id: &str) -> Result<ResendOutcome, ClientError> {
        let url = format!("{}/api/send-email-code", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&SendEmailCodeRequest { user_id })
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), event = "resend_response", "Received resend response");

        if status.is_success() {
            return Ok(ResendOutcome::accepted());
        }

        let body: SendEmailCodeResponse = response
            .json()
            .await
            .map_err(|_| ClientError::UnexpectedStatus(status.as_u16()))?;
        match body.error {
            Some(message) => Ok(ResendOutcome::rejected(Some(message))),
            None => Err(ClientError::UnexpectedStatus(status.as_u16())),
        }
    }
}

#[async_trait]
impl CodeDeliveryTrait for HttpCodeDelivery {
    async fn resend_code(&self, user_id: &str) -> Result<ResendOutcome, String> {
        self.post_resend(user_id).await.map_err(|e| {
            error!(error = %e, event = "resend_transport_failure", "Resend request failed");
            e.to_string()
        })
    }
}
