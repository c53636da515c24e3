//! Release date formatting.

use chrono::{DateTime, Utc};

/// Format epoch seconds as `MM/DD/YYYY, hh:mm:ss AM/PM` in UTC.
///
/// Timestamps chrono cannot represent are shown as the raw number.
pub fn format_release_date(epoch_secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(epoch_secs, 0) {
        Some(date) => date.format("%m/%d/%Y, %I:%M:%S %p").to_string(),
        None => epoch_secs.to_string(),
    }
}
