//! Domain entities for the registration flow

pub mod code_input;
pub mod registration_session;

pub use code_input::{CodeInput, CODE_LENGTH};
pub use registration_session::{FlowStep, RegistrationSession, MIN_PASSWORD_LENGTH};
