//! Flow services

pub mod countdown;
pub mod flow;

pub use countdown::CountdownTicker;
pub use flow::{
    AuthGatewayTrait, CodeDeliveryTrait, RegistrationFlow, RegistrationFlowConfig,
};
