//! Integration test wiring the registration flow to the countdown ticker
//! the way an embedding shell would.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use flux_core::domain::value_objects::auth_outcome::{
    CompleteOutcome, OtpProvisioning, RegisterOutcome, ResendOutcome,
};
use flux_core::domain::value_objects::resend_countdown::RESEND_COOLDOWN_SECONDS;
use flux_core::services::countdown::CountdownTicker;
use flux_core::services::flow::{
    AuthGatewayTrait, CodeDeliveryTrait, RegistrationFlow, RegistrationFlowConfig,
};
use flux_core::FlowStep;
use flux_shared::Language;

struct AcceptingGateway {
    two_factor: bool,
}

#[async_trait]
impl AuthGatewayTrait for AcceptingGateway {
    async fn register(&self, email: &str, _password: &str) -> Result<RegisterOutcome, String> {
        if self.two_factor {
            let secret = "JBSWY3DPEHPK3PXP";
            Ok(RegisterOutcome::accepted_with_otp(
                "u1",
                OtpProvisioning {
                    secret: secret.to_string(),
                    enrollment_uri: format!(
                        "otpauth://totp/FluxTrader:{}?secret={}&issuer=FluxTrader",
                        email, secret
                    ),
                },
            ))
        } else {
            Ok(RegisterOutcome::accepted("u1"))
        }
    }

    async fn complete_registration(
        &self,
        _user_id: &str,
        _code: &str,
    ) -> Result<CompleteOutcome, String> {
        Ok(CompleteOutcome::accepted())
    }
}

struct AcceptingDelivery;

#[async_trait]
impl CodeDeliveryTrait for AcceptingDelivery {
    async fn resend_code(&self, _user_id: &str) -> Result<ResendOutcome, String> {
        Ok(ResendOutcome::accepted())
    }
}

fn new_flow(two_factor: bool) -> RegistrationFlow<AcceptingGateway, AcceptingDelivery> {
    let mut flow = RegistrationFlow::new(
        Arc::new(AcceptingGateway { two_factor }),
        Arc::new(AcceptingDelivery),
        RegistrationFlowConfig::default(),
        Language::English,
    );
    flow.set_email("alice@example.com");
    flow.set_password("secret1");
    flow.set_confirm_password("secret1");
    flow
}

#[tokio::test(start_paused = true)]
async fn email_only_flow_with_real_ticker() {
    let mut flow = new_flow(false);
    flow.submit_registration().await;
    assert_eq!(flow.countdown_seconds(), RESEND_COOLDOWN_SECONDS);
    assert!(!flow.can_resend());

    // Drive the cooldown down with real (paused-clock) ticks
    let (tx, mut rx) = mpsc::channel(1);
    let mut ticker = CountdownTicker::new();
    ticker.start(tx);
    while flow.countdown_seconds() > 0 {
        rx.recv().await.expect("ticker alive while countdown runs");
        flow.tick();
    }
    ticker.stop();

    assert!(flow.can_resend());
    flow.resend_code().await;
    assert_eq!(flow.countdown_seconds(), RESEND_COOLDOWN_SECONDS);

    flow.set_code("123456");
    flow.submit_code().await;
    assert!(flow.is_complete());
}

#[tokio::test(start_paused = true)]
async fn two_factor_flow_reaches_completion() {
    let mut flow = new_flow(true);
    flow.submit_registration().await;

    let provisioning = flow.otp_provisioning().expect("two-factor enabled").clone();
    assert_eq!(provisioning.secret, "JBSWY3DPEHPK3PXP");
    assert!(provisioning
        .enrollment_uri
        .starts_with("otpauth://totp/FluxTrader:alice@example.com"));

    flow.confirm_otp_setup();
    assert!(matches!(flow.step(), FlowStep::VerifyOtp { .. }));

    flow.set_code("000000");
    flow.submit_code().await;
    assert!(flow.is_complete());
}

#[tokio::test(start_paused = true)]
async fn ticker_teardown_on_flow_drop() {
    let mut flow = new_flow(false);
    flow.submit_registration().await;

    let (tx, mut rx) = mpsc::channel(1);
    let mut ticker = CountdownTicker::new();
    ticker.start(tx);
    rx.recv().await.expect("first tick");
    flow.tick();

    // Navigating away drops the flow and the ticker together; no tick can
    // reach a destroyed session
    drop(flow);
    drop(ticker);
    assert_eq!(rx.recv().await, None);
}
