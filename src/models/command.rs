//! Transaction types understood by the gateway

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref TRANS_ID_PATTERNS: HashMap<CommandId, Regex> = CommandId::ALL
        .iter()
        .map(|command| {
            let pattern = Regex::new(&command.trans_id_pattern())
                .expect("trans-id pattern is a valid regex");
            (*command, pattern)
        })
        .collect();
}

/// `command-id` tag of a transaction request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandId {
    /// Agent cashout
    #[serde(rename = "AGNT")]
    AgentCashout,
    /// On-network cash transfer
    #[serde(rename = "CASH")]
    CashOnNet,
    /// Cross-border cash transfer
    #[serde(rename = "XCASH")]
    CrossBorderCash,
    /// Internet bundle billing
    #[serde(rename = "BILL")]
    Bill,
    /// Compte Moov Folie bundle billing
    #[serde(rename = "BILLF")]
    BillFolie,
}

impl CommandId {
    pub const ALL: [CommandId; 5] = [
        CommandId::AgentCashout,
        CommandId::CashOnNet,
        CommandId::CrossBorderCash,
        CommandId::Bill,
        CommandId::BillFolie,
    ];

    /// Wire tag
    pub fn as_str(self) -> &'static str {
        match self {
            CommandId::AgentCashout => "AGNT",
            CommandId::CashOnNet => "CASH",
            CommandId::CrossBorderCash => "XCASH",
            CommandId::Bill => "BILL",
            CommandId::BillFolie => "BILLF",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CommandId::AgentCashout => "Agent cashout",
            CommandId::CashOnNet => "On-net cash transfer",
            CommandId::CrossBorderCash => "Cross-border cash transfer",
            CommandId::Bill => "Moov internet bundle",
            CommandId::BillFolie => "Compte Moov Folie",
        }
    }

    /// `^<CMD>\d{6}\.\d{4}\.R\d{5}$`
    pub fn trans_id_pattern(self) -> String {
        format!(r"^{}\d{{6}}\.\d{{4}}\.R\d{{5}}$", self.as_str())
    }

    pub fn matches_trans_id(self, trans_id: &str) -> bool {
        TRANS_ID_PATTERNS
            .get(&self)
            .map_or(false, |pattern| pattern.is_match(trans_id))
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trans_id_pattern_accepts_gateway_format() {
        assert!(CommandId::AgentCashout.matches_trans_id("AGNT231019.1530.R00042"));
        assert!(CommandId::CrossBorderCash.matches_trans_id("XCASH000001.0000.R99999"));
        assert!(CommandId::BillFolie.matches_trans_id("BILLF123456.7890.R12345"));
    }

    #[test]
    fn test_trans_id_pattern_rejects_malformed_ids() {
        // wrong digit counts
        assert!(!CommandId::CashOnNet.matches_trans_id("CASH23101.1530.R00042"));
        assert!(!CommandId::CashOnNet.matches_trans_id("CASH231019.153.R00042"));
        assert!(!CommandId::CashOnNet.matches_trans_id("CASH231019.1530.R0004"));
        // missing R marker
        assert!(!CommandId::CashOnNet.matches_trans_id("CASH231019.1530.00042"));
        // another command's prefix
        assert!(!CommandId::CashOnNet.matches_trans_id("XCASH231019.1530.R00042"));
        assert!(!CommandId::Bill.matches_trans_id("BILLF231019.1530.R00042"));
        // anchored at both ends
        assert!(!CommandId::Bill.matches_trans_id("BILL231019.1530.R00042 "));
    }

    #[test]
    fn test_tags() {
        for command in CommandId::ALL {
            let json = serde_json::to_value(command).unwrap();
            assert_eq!(json, command.as_str());
        }
    }
}
