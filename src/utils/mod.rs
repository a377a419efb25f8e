pub mod table;

pub use table::Table;

use chrono::Utc;

/// Correlation token sent as `request-id`: `<prefix><unix millis>`
pub fn request_id(prefix: &str) -> String {
    format!("{}{}", prefix, Utc::now().timestamp_millis())
}
