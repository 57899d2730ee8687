//! # FluxTrader Core
//!
//! Domain layer for the FluxTrader registration and verification flow.
//! This crate contains the registration session entity, the flow state
//! machine, the countdown ticker resource, collaborator traits, and the
//! flow error types. Rendering, clipboard, and QR display are owned by the
//! embedding shell; this crate only exposes the data they need.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
