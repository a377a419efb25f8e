//! End-to-end contract checks for the mobile-money transaction gateway.
//!
//! Each suite under [`suites`] posts fixed JSON transactions to the gateway
//! and [`services::contract_service`] checks the answers: HTTP status, response
//! schema, echoed ids, business `status` code, `trans-id` format and the
//! localized message text.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod suites;
pub mod utils;

pub use api::gateway::{ApiError, GatewayClient};
pub use config::{ConfigError, GatewayConfig};
