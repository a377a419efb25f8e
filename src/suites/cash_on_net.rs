//! On-network cash transfer (`CASH`)

use crate::api::gateway::{ExtendedData, TransactionRequest};
use crate::models::{BusinessStatus, CommandId, Scenario, Suite};
use crate::suites::{VALID_PIN, WRONG_PIN};

pub const KEY: &str = "cash";
pub const REQUEST_ID_PREFIX: &str = "ONnetID-";
pub const SUCCESS_MESSAGE: &str = "Vous avez transfere";

pub const SENDER: &str = "2250102919300";
pub const DESTINATION: &str = "2250142373758";
/// Twelve digits: one short of a valid number
pub const MALFORMED_DESTINATION: &str = "225014237375";
pub const MALFORMED_SENDER: &str = "225010291930";

pub fn base_request(request_id: &str) -> TransactionRequest {
    TransactionRequest {
        request_id: request_id.to_string(),
        command_id: CommandId::CashOnNet,
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
            body.with_destination(MALFORMED_DESTINATION),
            BusinessStatus::InvalidDestination,
        ),
        Scenario::failure(
            "invalid sender number",
            body.with_sender(MALFORMED_SENDER),
            BusinessStatus::UnauthorizedSender,
        ),
    ];

    Suite {
        key: KEY,
        command: CommandId::CashOnNet,
        request_id,
        scenarios,
    }
}
