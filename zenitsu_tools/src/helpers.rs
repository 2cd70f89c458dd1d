use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use dpg_common::Rupiah;

use crate::ZenitsuApiError;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M"];

/// Mutation amounts use `.` as thousands separator, so `50.007` is fifty thousand and seven rupiah.
pub fn parse_credited_amount(kredit: &str) -> Result<Rupiah, ZenitsuApiError> {
    kredit
        .parse::<Rupiah>()
        .map_err(|e| ZenitsuApiError::InvalidCurrencyAmount(format!("Invalid mutation amount: {kredit}. {e}")))
}

/// Gateway timestamps come in several shapes, none of which carry an offset. Naive values are
/// taken as UTC.
pub fn parse_mutation_timestamp(date: &str) -> Result<DateTime<Utc>, ZenitsuApiError> {
    let date = date.trim();
    if let Ok(ts) = date.parse::<DateTime<Utc>>() {
        return Ok(ts);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| ZenitsuApiError::InvalidTimestamp(date.to_string()))
}
