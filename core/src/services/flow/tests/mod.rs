//! Tests for the registration flow
