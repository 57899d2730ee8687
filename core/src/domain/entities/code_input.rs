//! Verification code input buffer.

use serde::{Deserialize, Serialize};

/// Length of a delivered verification code
pub const CODE_LENGTH: usize = 6;

/// User-entered verification code, normalized on every update
///
/// The buffer only ever holds ASCII digits and never grows past
/// [`CODE_LENGTH`]: non-digit characters are stripped and excess digits are
/// truncated before storage, so downstream code can rely on the invariant
/// without re-validating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInput(String);

impl CodeInput {
    /// Creates an empty code input
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the buffer with the normalized form of `raw`
    ///
    /// Non-digit characters are dropped and the result is truncated to
    /// [`CODE_LENGTH`] digits.
    pub fn set(&mut self, raw: &str) {
        self.0 = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(CODE_LENGTH)
            .collect();
    }

    /// Returns the normalized digits entered so far
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits entered so far
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no digits have been entered
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the buffer holds a full-length code ready for submission
    pub fn is_complete(&self) -> bool {
        self.0.len() == CODE_LENGTH
    }

    /// Discards the entered digits
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl std::fmt::Display for CodeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
