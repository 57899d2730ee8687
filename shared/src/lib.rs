//! # FluxTrader Shared
//!
//! Shared types for the FluxTrader client crates: the language preference
//! type and the catalog of user-visible flow messages.

pub mod i18n;
pub mod types;

pub use types::language::Language;
