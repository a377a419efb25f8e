//! In-process stand-in for the transaction gateway.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use gateway_e2e::models::status::{
    INVALID_DESTINATION_MESSAGE, INVALID_PIN_MESSAGE, UNAUTHORIZED_DESTINATION_MESSAGE,
    UNAUTHORIZED_SENDER_MESSAGE,
};
use gateway_e2e::GatewayClient;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const VALID_PIN: &str = "2222";
const SUBSCRIBERS: [&str; 3] = ["2250101080452", "2250102919300", "2250142373758"];
const AGENT_NUMBERS: [&str; 1] = ["2250143567896"];
const XBORDER_BILLERS: [&str; 1] = ["XBORDER_SEND_BJ"];

/// Answers like the seeded gateway: business outcomes in a 200 body
#[derive(Default)]
pub struct FakeGateway {
    sequence: AtomicU32,
}

impl FakeGateway {
    fn decide(body: &Value) -> (i64, String) {
        let field = |key: &str| body.get(key).and_then(Value::as_str).unwrap_or_default();
        let command = field("command-id");
        let sender = field("sender");
        let destination = field("destination");
        let amount = field("amount");
        let beneficiary = body["extended-data"]["beneficiary"].as_str().unwrap_or_default();

        if field("auth") != VALID_PIN {
            return (8, INVALID_PIN_MESSAGE.to_string());
        }
        if !SUBSCRIBERS.contains(&sender) && !AGENT_NUMBERS.contains(&sender) {
            return (4, UNAUTHORIZED_SENDER_MESSAGE.to_string());
        }

        match command {
            "AGNT" | "CASH" => {
                if !SUBSCRIBERS.contains(&destination) && !AGENT_NUMBERS.contains(&destination) {
                    (3, INVALID_DESTINATION_MESSAGE.to_string())
                } else if command == "AGNT" {
                    (0, format!("Un retrait de {} FCFA a ete effectue.", amount))
                } else {
                    (0, format!("Vous avez transfere {} FCFA au {}.", amount, destination))
                }
            }
            "XCASH" => {
                if !XBORDER_BILLERS.contains(&destination) {
                    (51, UNAUTHORIZED_DESTINATION_MESSAGE.to_string())
                } else {
                    (0, format!("Vous avez transfere {} FCFA vers le Benin.", amount))
                }
            }
            "BILL" | "BILLF" => {
                if !SUBSCRIBERS.contains(&beneficiary) {
                    (51, UNAUTHORIZED_DESTINATION_MESSAGE.to_string())
                } else {
                    (0, format!("Débit de {} FCFA pour le forfait de {}.", amount, beneficiary))
                }
            }
            _ => (99, "Commande inconnue".to_string()),
        }
    }
}

impl Respond for FakeGateway {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return ResponseTemplate::new(400);
        };
        let (status, message) = Self::decide(&body);
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        let command = body["command-id"].as_str().unwrap_or_default();

        ResponseTemplate::new(200).set_body_json(json!({
            "command-id": command,
            "trans-id": format!("{}231019.1530.R{:05}", command, sequence),
            "request-id": body["request-id"],
            "status": status,
            "message": message,
        }))
    }
}

/// Mock server with the fake gateway mounted on /gateway/transaction.
/// Any other path (including the truncated /gateway) gets wiremock's 404.
pub async fn start_gateway() -> MockServer {
    let server = MockServer::start().await;
    mount_gateway(&server).await;
    server
}

pub async fn mount_gateway(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/gateway/transaction"))
        .and(header("content-type", "application/json"))
        .respond_with(FakeGateway::default())
        .mount(server)
        .await;
}

pub fn client_for(server: &MockServer) -> GatewayClient {
    GatewayClient::with_base_url(server.uri(), Duration::from_secs(5)).unwrap()
}
