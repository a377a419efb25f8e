//! Request fixtures and expectations, one module per transaction type.
//!
//! The phone numbers, PINs and biller codes below exist in the seeded test
//! backend; the message fragments are the gateway's French texts verbatim.

pub mod agnt_cashout;
pub mod cash_on_net;
pub mod xcash;
pub mod moov_internet;
pub mod compte_moov_folie;

use crate::api::gateway::TransactionRequest;
use crate::models::{BusinessStatus, Scenario, Suite};
use crate::utils;

pub const VALID_PIN: &str = "2222";
pub const WRONG_PIN: &str = "1234";
pub const INVALID_SENDER: &str = "invalid_sender";
pub const INVALID_DESTINATION: &str = "invalid_destination";
pub const INVALID_BENEFICIARY: &str = "invalid_beneficiary";

/// Success fragment for bundle purchases
pub const BUNDLE_SUCCESS_MESSAGE: &str = "Débit de";

/// Suite keys in run order
pub const SUITE_KEYS: [&str; 5] = [
    agnt_cashout::KEY,
    cash_on_net::KEY,
    xcash::KEY,
    moov_internet::KEY,
    compte_moov_folie::KEY,
];

/// Build a suite by key (case-insensitive) with a fresh request-id
pub fn build_suite(key: &str) -> Option<Suite> {
    let key = key.trim().to_ascii_lowercase();
    let suite = match key.as_str() {
        agnt_cashout::KEY => agnt_cashout::suite(utils::request_id(agnt_cashout::REQUEST_ID_PREFIX)),
        cash_on_net::KEY => cash_on_net::suite(utils::request_id(cash_on_net::REQUEST_ID_PREFIX)),
        xcash::KEY => xcash::suite(utils::request_id(xcash::REQUEST_ID_PREFIX)),
        moov_internet::KEY => moov_internet::suite(utils::request_id(moov_internet::REQUEST_ID_PREFIX)),
        compte_moov_folie::KEY => {
            compte_moov_folie::suite(utils::request_id(compte_moov_folie::REQUEST_ID_PREFIX))
        }
        _ => return None,
    };
    Some(suite)
}

pub fn build_all() -> Vec<Suite> {
    SUITE_KEYS.iter().filter_map(|key| build_suite(key)).collect()
}

/// The five checks run for each bundle variant (SELF / OTHERS)
pub(crate) fn bundle_scenarios(variant: &str, body: &TransactionRequest) -> Vec<Scenario> {
    vec![
        Scenario::success(&format!("success ({})", variant), body.clone(), BUNDLE_SUCCESS_MESSAGE),
        Scenario::not_found(&format!("invalid endpoint ({})", variant), body.clone()),
        Scenario::failure(
            &format!("invalid PIN ({})", variant),
            body.with_auth(WRONG_PIN),
            BusinessStatus::InvalidPin,
        ),
        Scenario::failure(
            &format!("not authorized destination ({})", variant),
            body.with_extended("beneficiary", INVALID_BENEFICIARY),
            BusinessStatus::UnauthorizedDestination,
        ),
        Scenario::failure(
            &format!("not authorized sender ({})", variant),
            body.with_sender(INVALID_SENDER),
            BusinessStatus::UnauthorizedSender,
        ),
    ]
}
