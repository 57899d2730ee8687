//! Main registration flow implementation

use std::sync::Arc;

use flux_shared::i18n::{message, MessageKey};
use flux_shared::Language;

use crate::domain::entities::registration_session::{FlowStep, RegistrationSession};
use crate::domain::value_objects::auth_outcome::{OtpProvisioning, RegisterOutcome};
use crate::errors::{user_message, FlowError, ValidationError};

use super::config::RegistrationFlowConfig;
use super::email_utils::mask_email;
use super::traits::{AuthGatewayTrait, CodeDeliveryTrait};

/// State machine driving account creation and verification
///
/// The flow owns its [`RegistrationSession`] exclusively. Every handler
/// runs to completion before the next event is processed; the only thing
/// that may overlap an in-flight request in real time is the countdown
/// tick, which touches disjoint state. Dropping the flow discards the
/// session, so a late collaborator response can never mutate a destroyed
/// session.
pub struct RegistrationFlow<A: AuthGatewayTrait, D: CodeDeliveryTrait> {
    /// Auth gateway for register / complete-registration calls
    auth: Arc<A>,
    /// Code-delivery endpoint for resending verification codes
    delivery: Arc<D>,
    /// Flow state, exclusively owned
    session: RegistrationSession,
    /// Flow configuration
    config: RegistrationFlowConfig,
    /// Language for user-visible messages
    language: Language,
}

impl<A: AuthGatewayTrait, D: CodeDeliveryTrait> RegistrationFlow<A, D> {
    /// Creates a fresh flow in the `Register` step
    pub fn new(
        auth: Arc<A>,
        delivery: Arc<D>,
        config: RegistrationFlowConfig,
        language: Language,
    ) -> Self {
        Self {
            auth,
            delivery,
            session: RegistrationSession::new(),
            config,
            language,
        }
    }

    // ---- input setters ----

    /// Updates the email field
    pub fn set_email(&mut self, email: &str) {
        self.session.email = email.to_string();
    }

    /// Updates the password field
    pub fn set_password(&mut self, password: &str) {
        self.session.password = password.to_string();
    }

    /// Updates the password confirmation field
    pub fn set_confirm_password(&mut self, confirm: &str) {
        self.session.confirm_password = confirm.to_string();
    }

    /// Updates the code field, stripping non-digits and truncating to the
    /// code length
    pub fn set_code(&mut self, raw: &str) {
        self.session.code.set(raw);
    }

    // ---- read accessors for the shell ----

    /// Current flow step
    pub fn step(&self) -> &FlowStep {
        &self.session.step
    }

    /// Last user-visible failure message, if any
    pub fn error(&self) -> Option<&str> {
        self.session.error.as_deref()
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        self.session.loading
    }

    /// Seconds remaining until resend is allowed
    pub fn countdown_seconds(&self) -> u32 {
        self.session.countdown.seconds()
    }

    /// Whether the resend action is currently permitted
    pub fn can_resend(&self) -> bool {
        self.session.countdown.is_elapsed() && !self.session.loading
    }

    /// Whether the code submit action is currently permitted
    pub fn can_submit_code(&self) -> bool {
        self.session.code.len() == self.config.code_length && !self.session.loading
    }

    /// Normalized code entered so far
    pub fn code(&self) -> &str {
        self.session.code.as_str()
    }

    /// Email entered so far
    pub fn email(&self) -> &str {
        &self.session.email
    }

    /// Backend-assigned user id, once past registration
    pub fn user_id(&self) -> Option<&str> {
        self.session.user_id()
    }

    /// Two-factor enrollment data for display (secret and scannable URI)
    pub fn otp_provisioning(&self) -> Option<&OtpProvisioning> {
        self.session.otp_provisioning()
    }

    /// Whether the flow reached successful completion
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// The underlying session, for the shell to render from
    pub fn session(&self) -> &RegistrationSession {
        &self.session
    }

    // ---- flow actions ----

    /// Submits the registration form
    ///
    /// This method:
    /// 1. Clears the previous error
    /// 2. Validates locally: confirmation match first, then minimum
    ///    length; the first failure wins and no network call is made
    /// 3. Calls `register` on the auth gateway
    /// 4. On success transitions to `VerifyEmail` (with two-factor
    ///    provisioning when the backend returned it) and starts the
    ///    resend cooldown
    /// 5. On rejection or transport failure surfaces a normalized message
    ///    and stays in `Register`
    pub async fn submit_registration(&mut self) {
        if !matches!(self.session.step, FlowStep::Register) {
            tracing::warn!(
                session_id = %self.session.id,
                step = self.session.step.name(),
                event = "action_out_of_state",
                "Ignoring registration submit outside the register step"
            );
            return;
        }
        if self.session.loading {
            return;
        }

        self.session.error = None;

        if let Err(e) = self.validate_credentials() {
            tracing::info!(
                session_id = %self.session.id,
                event = "local_validation_failed",
                error = %e,
                "Registration rejected client-side"
            );
            self.session.error = Some(user_message(&FlowError::Validation(e), self.language));
            return;
        }

        self.session.loading = true;
        tracing::info!(
            session_id = %self.session.id,
            email = %mask_email(&self.session.email),
            event = "registration_submitted",
            "Submitting registration"
        );

        match self
            .auth
            .register(&self.session.email, &self.session.password)
            .await
        {
            Ok(RegisterOutcome {
                success: true,
                user_id: Some(user_id),
                provisioning,
                ..
            }) => {
                tracing::info!(
                    session_id = %self.session.id,
                    user_id = %user_id,
                    two_factor = provisioning.is_some(),
                    event = "registration_accepted",
                    "Registration accepted, awaiting email verification"
                );
                self.session.step = FlowStep::VerifyEmail {
                    user_id,
                    provisioning,
                };
                self.session
                    .countdown
                    .reset_to(self.config.resend_cooldown_seconds);
            }
            Ok(outcome) => {
                tracing::warn!(
                    session_id = %self.session.id,
                    event = "registration_rejected",
                    "Registration rejected by the auth service"
                );
                self.session.error = Some(user_message(
                    &FlowError::Rejected {
                        message: outcome.message,
                    },
                    self.language,
                ));
            }
            Err(transport) => {
                tracing::error!(
                    session_id = %self.session.id,
                    error = %transport,
                    event = "registration_transport_failure",
                    "Registration request failed in transit"
                );
                self.session.error = Some(user_message(
                    &FlowError::Transport { message: transport },
                    self.language,
                ));
            }
        }

        self.session.loading = false;
    }

    /// Confirms the two-factor enrollment display and moves to OTP entry
    ///
    /// Pure transition, no service call. Only valid in the two-factor
    /// `VerifyEmail` variant; anywhere else it is ignored.
    pub fn confirm_otp_setup(&mut self) {
        match &self.session.step {
            FlowStep::VerifyEmail {
                user_id,
                provisioning: Some(_),
            } => {
                let user_id = user_id.clone();
                tracing::info!(
                    session_id = %self.session.id,
                    user_id = %user_id,
                    event = "otp_setup_confirmed",
                    "Two-factor setup confirmed, moving to OTP entry"
                );
                self.session.code.clear();
                self.session.step = FlowStep::VerifyOtp { user_id };
            }
            _ => {
                tracing::warn!(
                    session_id = %self.session.id,
                    step = self.session.step.name(),
                    event = "action_out_of_state",
                    "Ignoring OTP setup confirmation outside the two-factor variant"
                );
            }
        }
    }

    /// Submits the entered verification code
    ///
    /// Permitted in the email-only `VerifyEmail` variant and in
    /// `VerifyOtp`. Refused client-side unless the code is complete and no
    /// request is in flight. On success the flow is complete and control
    /// returns to the external session layer.
    pub async fn submit_code(&mut self) {
        let user_id = match &self.session.step {
            FlowStep::VerifyEmail {
                user_id,
                provisioning: None,
            }
            | FlowStep::VerifyOtp { user_id } => user_id.clone(),
            _ => {
                tracing::warn!(
                    session_id = %self.session.id,
                    step = self.session.step.name(),
                    event = "action_out_of_state",
                    "Ignoring code submit outside a code-entry step"
                );
                return;
            }
        };

        if !self.can_submit_code() {
            tracing::debug!(
                session_id = %self.session.id,
                code_len = self.session.code.len(),
                loading = self.session.loading,
                event = "code_submit_refused",
                "Code submit refused client-side"
            );
            return;
        }

        self.session.error = None;
        self.session.loading = true;

        match self
            .auth
            .complete_registration(&user_id, self.session.code.as_str())
            .await
        {
            Ok(outcome) if outcome.success => {
                tracing::info!(
                    session_id = %self.session.id,
                    user_id = %user_id,
                    event = "registration_completed",
                    "Verification code accepted, registration complete"
                );
                self.session.step = FlowStep::Completed { user_id };
            }
            Ok(outcome) => {
                tracing::warn!(
                    session_id = %self.session.id,
                    user_id = %user_id,
                    event = "code_rejected",
                    "Verification code rejected"
                );
                self.session.error = Some(user_message(
                    &FlowError::Rejected {
                        message: outcome.message,
                    },
                    self.language,
                ));
            }
            Err(transport) => {
                tracing::error!(
                    session_id = %self.session.id,
                    user_id = %user_id,
                    error = %transport,
                    event = "code_transport_failure",
                    "Code submission failed in transit"
                );
                self.session.error = Some(user_message(
                    &FlowError::Transport { message: transport },
                    self.language,
                ));
            }
        }

        self.session.loading = false;
    }

    /// Requests a fresh verification code delivery
    ///
    /// A no-op while the cooldown is running or a request is in flight.
    /// On success the cooldown resets to the full interval; on failure the
    /// cooldown is left untouched so the user may retry immediately.
    pub async fn resend_code(&mut self) {
        let user_id = match &self.session.step {
            FlowStep::VerifyEmail { user_id, .. } | FlowStep::VerifyOtp { user_id } => {
                user_id.clone()
            }
            _ => {
                tracing::warn!(
                    session_id = %self.session.id,
                    step = self.session.step.name(),
                    event = "action_out_of_state",
                    "Ignoring resend outside a verification step"
                );
                return;
            }
        };

        if !self.session.countdown.is_elapsed() {
            tracing::debug!(
                session_id = %self.session.id,
                remaining = self.session.countdown.seconds(),
                event = "resend_throttled",
                "Resend requested during cooldown"
            );
            return;
        }
        if self.session.loading {
            return;
        }

        self.session.error = None;
        self.session.loading = true;

        match self.delivery.resend_code(&user_id).await {
            Ok(outcome) if outcome.accepted => {
                tracing::info!(
                    session_id = %self.session.id,
                    user_id = %user_id,
                    event = "code_resent",
                    "Verification code resent"
                );
                self.session
                    .countdown
                    .reset_to(self.config.resend_cooldown_seconds);
            }
            Ok(outcome) => {
                tracing::warn!(
                    session_id = %self.session.id,
                    user_id = %user_id,
                    event = "resend_rejected",
                    "Resend rejected by the delivery endpoint"
                );
                self.session.error = Some(outcome.error.unwrap_or_else(|| {
                    message(MessageKey::ResendFailed, self.language).to_string()
                }));
            }
            Err(transport) => {
                tracing::error!(
                    session_id = %self.session.id,
                    user_id = %user_id,
                    error = %transport,
                    event = "resend_transport_failure",
                    "Resend request failed in transit"
                );
                self.session.error = Some(user_message(
                    &FlowError::Transport { message: transport },
                    self.language,
                ));
            }
        }

        self.session.loading = false;
    }

    /// Advances the resend countdown by one second
    ///
    /// Idempotent once the countdown has elapsed.
    pub fn tick(&mut self) {
        self.session.countdown.tick();
    }

    /// Validates the credential fields in order; the first failure wins
    ///
    /// Length is measured in characters, not bytes, so multibyte passwords
    /// are held to the same minimum.
    fn validate_credentials(&self) -> Result<(), ValidationError> {
        if self.session.password != self.session.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.session.password.chars().count() < self.config.min_password_length {
            return Err(ValidationError::PasswordTooShort {
                min: self.config.min_password_length,
            });
        }
        Ok(())
    }
}
