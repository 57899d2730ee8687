//! # FluxTrader Client
//!
//! Collaborator implementations for the registration flow: HTTP gateways
//! backed by `reqwest`, and mock implementations for development and
//! testing without a backend.

pub mod error;
pub mod http;
pub mod mock;

pub use error::ClientError;
pub use http::{HttpAuthGateway, HttpCodeDelivery};
pub use mock::{MockAuthGateway, MockCodeDelivery};
