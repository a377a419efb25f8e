//! Agent cashout (`AGNT`)

use crate::api::gateway::{ExtendedData, TransactionRequest};
use crate::models::{BusinessStatus, CommandId, Scenario, Suite};
use crate::suites::{INVALID_DESTINATION, INVALID_SENDER, VALID_PIN, WRONG_PIN};

pub const KEY: &str = "agnt";
pub const REQUEST_ID_PREFIX: &str = "agntCashoutID-";
pub const SUCCESS_MESSAGE: &str = "Un retrait de";

pub const SENDER: &str = "2250101080452";
pub const DESTINATION: &str = "2250143567896";

pub fn base_request(request_id: &str) -> TransactionRequest {
    TransactionRequest {
        request_id: request_id.to_string(),
        command_id: CommandId::AgentCashout,
        sender: SENDER.to_string(),
        destination: DESTINATION.to_string(),
        auth: VALID_PIN.to_string(),
        amount: "100".to_string(),
        remarks: String::new(),
        extended_data: ExtendedData::from_pairs(&[("lang", "F"), ("cellid", "")]),
    }
}

pub fn suite(request_id: String) -> Suite {
    let body = base_request(&request_id);
    let scenarios = vec![
        Scenario::success("success", body.clone(), SUCCESS_MESSAGE),
        Scenario::not_found("invalid endpoint", body.clone()),
        Scenario::failure("invalid PIN", body.with_auth(WRONG_PIN), BusinessStatus::InvalidPin),
        Scenario::failure(
            "invalid destination number",
            body.with_destination(INVALID_DESTINATION),
            BusinessStatus::InvalidDestination,
        ),
        Scenario::failure(
            "invalid sender number",
            body.with_sender(INVALID_SENDER),
            BusinessStatus::UnauthorizedSender,
        ),
    ];

    Suite {
        key: KEY,
        command: CommandId::AgentCashout,
        request_id,
        scenarios,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_matches_gateway_example() {
        let json = serde_json::to_value(base_request("agntCashoutID-1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "request-id": "agntCashoutID-1",
                "command-id": "AGNT",
                "sender": "2250101080452",
                "destination": "2250143567896",
                "auth": "2222",
                "amount": "100",
                "remarks": "",
                "extended-data": { "lang": "F", "cellid": "" }
            })
        );
    }

    #[test]
    fn test_scenarios() {
        let suite = suite("agntCashoutID-1".to_string());
        assert_eq!(suite.scenarios.len(), 5);
        assert_eq!(suite.scenarios[3].body.destination, "invalid_destination");
        assert_eq!(suite.scenarios[4].body.sender, "invalid_sender");
    }
}
