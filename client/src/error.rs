//! Client-side error types

use thiserror::Error;

/// Errors raised by the HTTP collaborator implementations
///
/// At the flow trait seam these collapse into the transport-failure arm;
/// the variants exist so logs can tell connection problems apart from
/// protocol problems.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the connection failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a body that could not be interpreted
    #[error("Malformed response body: {0}")]
    MalformedResponse(String),

    /// The endpoint answered with a failure status and no usable body
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),
}
