//! Shared type definitions

pub mod language;

pub use language::Language;
