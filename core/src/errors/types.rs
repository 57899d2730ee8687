//! Flow-specific error types
//!
//! These types represent the failure taxonomy of the registration flow.
//! The user-visible text lives in the `flux_shared` message catalog; these
//! `#[error]` strings are for logs and debugging only.

use thiserror::Error;

/// Client-side validation failures, detected before any network call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    #[error("Password shorter than {min} characters")]
    PasswordTooShort { min: usize },
}

/// Rejection and transport failures of the registration flow
///
/// Every variant is recoverable: the flow stays in its current state and
/// the user may retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered but declined the request
    #[error("Service rejected the request")]
    Rejected { message: Option<String> },

    /// The endpoint was unreachable or the response was malformed
    #[error("Transport failure: {message}")]
    Transport { message: String },
}
