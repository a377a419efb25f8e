pub mod client;
pub mod models;

pub use client::GatewayClient;
pub use models::{ApiError, Endpoint, ExtendedData, GatewayReply, TransactionRequest, TransactionResponse};
