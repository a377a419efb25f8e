//! Compte Moov Folie bundle (`BILLF`)

use crate::api::gateway::{ExtendedData, TransactionRequest};
use crate::models::{CommandId, Suite};
use crate::suites::{bundle_scenarios, VALID_PIN};

pub const KEY: &str = "billf";
pub const REQUEST_ID_PREFIX: &str = "FOLIE-ID-";

pub const SENDER: &str = "2250102919300";
pub const BILLER: &str = "COMPTE_MOOV_FOLIE";
pub const OTHER_BENEFICIARY: &str = "2250142373758";
pub const REFILL_PROFILE: &str = "300";

fn request(request_id: &str, beneficiary: &str, target: &str) -> TransactionRequest {
    TransactionRequest {
        request_id: request_id.to_string(),
        command_id: CommandId::BillFolie,
        sender: SENDER.to_string(),
        destination: BILLER.to_string(),
        auth: VALID_PIN.to_string(),
        amount: "100".to_string(),
        remarks: String::new(),
        extended_data: ExtendedData::from_pairs(&[
            ("custommessage", ""),
            ("biller-name", "INTERNET"),
            ("beneficiary", beneficiary),
            ("biller-code", ""),
            ("account-number", ""),
            ("lang", "F"),
            ("cellid", ""),
            ("biller-reference", ""),
            ("ext2", target),
            ("ext1", REFILL_PROFILE),
            ("refillprofileid", REFILL_PROFILE),
        ]),
    }
}

pub fn self_request(request_id: &str) -> TransactionRequest {
    request(request_id, SENDER, "SELF")
}

pub fn others_request(request_id: &str) -> TransactionRequest {
    request(request_id, OTHER_BENEFICIARY, OTHER_BENEFICIARY)
}

pub fn suite(request_id: String) -> Suite {
    let mut scenarios = bundle_scenarios("SELF", &self_request(&request_id));
    scenarios.extend(bundle_scenarios("OTHERS", &others_request(&request_id)));

    Suite {
        key: KEY,
        command: CommandId::BillFolie,
        request_id,
        scenarios,
    }
}
