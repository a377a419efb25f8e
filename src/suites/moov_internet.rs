//! Moov internet bundle purchase (`BILL`), for oneself and for another number

use crate::api::gateway::{ExtendedData, TransactionRequest};
use crate::models::{CommandId, Suite};
use crate::suites::{bundle_scenarios, VALID_PIN};

pub const KEY: &str = "bill";
pub const REQUEST_ID_PREFIX: &str = "Moov-";

pub const SENDER: &str = "2250102919300";
pub const BILLER: &str = "MOOV_INTERNET";
pub const OTHER_BENEFICIARY: &str = "2250142373758";

pub fn self_request(request_id: &str) -> TransactionRequest {
    TransactionRequest {
        request_id: request_id.to_string(),
        command_id: CommandId::Bill,
        sender: SENDER.to_string(),
        destination: BILLER.to_string(),
        auth: VALID_PIN.to_string(),
        amount: "156".to_string(),
        remarks: String::new(),
        extended_data: ExtendedData::from_pairs(&[
            ("custommessage", ""),
            ("account-number", ""),
            ("cellid", ""),
            ("biller-reference", ""),
            ("biller-name", "INTERNET"),
            ("beneficiary", SENDER),
            ("biller-code", ""),
            ("lang", "F"),
            ("ext4", "MoovMoney"),
            ("ext2", "MBOPT1"),
            ("ext1", "MB|1009"),
            ("refillprofileid", "1009"),
        ]),
    }
}

pub fn others_request(request_id: &str) -> TransactionRequest {
    TransactionRequest {
        request_id: request_id.to_string(),
        command_id: CommandId::Bill,
        sender: SENDER.to_string(),
        destination: BILLER.to_string(),
        auth: VALID_PIN.to_string(),
        amount: "213".to_string(),
        remarks: String::new(),
        extended_data: ExtendedData::from_pairs(&[
            ("custommessage", ""),
            ("channel", "mobileapp-ios"),
            ("account-number", ""),
            ("cellid", ""),
            ("biller-reference", ""),
            ("biller-name", "INTERNET"),
            ("beneficiary", OTHER_BENEFICIARY),
            ("biller-code", ""),
            ("lang", "F"),
            ("ext4", "MoovMoney"),
            ("ext2", OTHER_BENEFICIARY),
            ("ext1", "MB|1008"),
            ("refillprofileid", "1008"),
        ]),
    }
}

pub fn suite(request_id: String) -> Suite {
    let mut scenarios = bundle_scenarios("SELF", &self_request(&request_id));
    scenarios.extend(bundle_scenarios("OTHERS", &others_request(&request_id)));

    Suite {
        key: KEY,
        command: CommandId::Bill,
        request_id,
        scenarios,
    }
}
