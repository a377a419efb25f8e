//! Cross-border cash transfer (`XCASH`)
//!
//! The destination is the cross-border biller code; the beneficiary abroad is
//! carried in `extended-data.recipient`.

use crate::api::gateway::{ExtendedData, TransactionRequest};
use crate::models::{BusinessStatus, CommandId, Scenario, Suite};
use crate::suites::{INVALID_DESTINATION, INVALID_SENDER, VALID_PIN, WRONG_PIN};

pub const KEY: &str = "xcash";
pub const REQUEST_ID_PREFIX: &str = "XCASHID-";
pub const SUCCESS_MESSAGE: &str = "Vous avez transfere";

pub const SENDER: &str = "2250102919300";
pub const BILLER: &str = "XBORDER_SEND_BJ";
pub const RECIPIENT: &str = "2290101080452";

pub fn base_request(request_id: &str) -> TransactionRequest {
    TransactionRequest {
        request_id: request_id.to_string(),
        command_id: CommandId::CrossBorderCash,
        sender: SENDER.to_string(),
        destination: BILLER.to_string(),
        auth: VALID_PIN.to_string(),
        amount: "1354".to_string(),
        remarks: String::new(),
        extended_data: ExtendedData::from_pairs(&[
            ("custommessage", ""),
            ("lang", "F"),
            ("cellid", "1234"),
            ("biller-reference", ""),
            ("ext2", ""),
            ("ext1", ""),
            ("biller-code", ""),
            ("biller-name", BILLER),
            ("account-number", ""),
            ("recipient", RECIPIENT),
        ]),
    }
}

pub fn suite(request_id: String) -> Suite {
    let body = base_request(&request_id);
    let scenarios = vec![
        Scenario::success("success", body.clone(), SUCCESS_MESSAGE),
        Scenario::not_found("invalid endpoint", body.clone()),
        Scenario::failure(
            "invalid PIN",
            body.with_auth(WRONG_PIN).with_amount("500"),
            BusinessStatus::InvalidPin,
        ),
        Scenario::failure(
            "not authorized destination number",
            body.with_destination(INVALID_DESTINATION).with_amount("200"),
            BusinessStatus::UnauthorizedDestination,
        ),
        Scenario::failure(
            "invalid sender number",
            body.with_sender(INVALID_SENDER).with_amount("200"),
            BusinessStatus::UnauthorizedSender,
        ),
    ];

    Suite {
        key: KEY,
        command: CommandId::CrossBorderCash,
        request_id,
        scenarios,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_data() {
        let body = base_request("XCASHID-1");
        assert_eq!(body.extended_data.len(), 10);
        assert_eq!(body.extended_data.get("biller-name"), Some(BILLER));
        assert_eq!(body.extended_data.get("recipient"), Some(RECIPIENT));
        assert_eq!(body.extended_data.get("cellid"), Some("1234"));
    }

    #[test]
    fn test_unauthorized_destination_expects_51() {
        let suite = suite("XCASHID-1".to_string());
        let scenario = suite
            .scenarios
            .iter()
            .find(|s| s.body.destination == INVALID_DESTINATION)
            .unwrap();
        assert_eq!(
            scenario.expectation,
            crate::models::Expectation::Business {
                status: BusinessStatus::UnauthorizedDestination,
                message_parts: vec![crate::models::status::UNAUTHORIZED_DESTINATION_MESSAGE.to_string()],
            }
        );
    }
}
