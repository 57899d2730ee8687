//! HTTP implementations of the flow collaborator traits

mod auth_gateway;
mod code_delivery;
pub mod dto;

pub use auth_gateway::HttpAuthGateway;
pub use code_delivery::HttpCodeDelivery;
