//! Business result codes carried in the `status` field of a 200 response

use std::fmt;

pub const INVALID_PIN_MESSAGE: &str = "Le code secret que vous avez saisi est errone,veuillez reessayer svp ou  RDV avec votre piece d'identite dans l'agence Moov la plus proche pour le reinitialiser.";
pub const INVALID_DESTINATION_MESSAGE: &str =
    "Le numero que vous avez entre n'est pas valide. Merci de verifier et reessayer svp . ";
pub const UNAUTHORIZED_SENDER_MESSAGE: &str =
    "Desole, vous n'etes pas autorise a effectuer cette transaction.";
pub const UNAUTHORIZED_DESTINATION_MESSAGE: &str =
    "Desole, le numero du destinataire n'est pas autorise a recevoir un transfert d'argent.";

/// Gateway business status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessStatus {
    /// 0
    Success,
    /// 3: destination number malformed
    InvalidDestination,
    /// 4: sender not authorized
    UnauthorizedSender,
    /// 8: PIN incorrect
    InvalidPin,
    /// 51: destination not authorized to receive a transfer
    UnauthorizedDestination,
    /// Any code outside the observed taxonomy, kept verbatim
    Other(i64),
}

impl BusinessStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => BusinessStatus::Success,
            3 => BusinessStatus::InvalidDestination,
            4 => BusinessStatus::UnauthorizedSender,
            8 => BusinessStatus::InvalidPin,
            51 => BusinessStatus::UnauthorizedDestination,
            other => BusinessStatus::Other(other),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            BusinessStatus::Success => 0,
            BusinessStatus::InvalidDestination => 3,
            BusinessStatus::UnauthorizedSender => 4,
            BusinessStatus::InvalidPin => 8,
            BusinessStatus::UnauthorizedDestination => 51,
            BusinessStatus::Other(code) => code,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BusinessStatus::Success => "success",
            BusinessStatus::InvalidDestination => "destination number malformed",
            BusinessStatus::UnauthorizedSender => "sender not authorized",
            BusinessStatus::InvalidPin => "PIN incorrect",
            BusinessStatus::UnauthorizedDestination => "destination not authorized to receive",
            BusinessStatus::Other(_) => "unknown status",
        }
    }

    /// Localized message the gateway must include for this failure.
    /// Success messages depend on the command and live with the suites.
    pub fn failure_message(self) -> Option<&'static str> {
        match self {
            BusinessStatus::InvalidDestination => Some(INVALID_DESTINATION_MESSAGE),
            BusinessStatus::UnauthorizedSender => Some(UNAUTHORIZED_SENDER_MESSAGE),
            BusinessStatus::InvalidPin => Some(INVALID_PIN_MESSAGE),
            BusinessStatus::UnauthorizedDestination => Some(UNAUTHORIZED_DESTINATION_MESSAGE),
            BusinessStatus::Success | BusinessStatus::Other(_) => None,
        }
    }
}

impl fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.description())
    }
}
