use chrono::{DateTime, Utc};
use dpg_common::Rupiah;
use serde::{Deserialize, Serialize};

use crate::{
    helpers::{parse_credited_amount, parse_mutation_timestamp},
    ZenitsuApiError,
};

//--------------------------------------    Response envelope    -------------------------------------------------------

/// Every Zenitsu endpoint wraps its payload in the same envelope. The HTTP status is 200 even for
/// business failures, so `status_code` is the field that decides success.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZenitsuEnvelope<T> {
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<T>,
}

impl<T> ZenitsuEnvelope<T> {
    pub fn into_results(self) -> Result<T, ZenitsuApiError> {
        match (self.status_code, self.results) {
            (200, Some(results)) => Ok(results),
            (200, None) => {
                Err(ZenitsuApiError::JsonError("Response did not include a results payload".to_string()))
            },
            (status, _) => Err(ZenitsuApiError::Rejected {
                status,
                message: self.message.unwrap_or_else(|| "No reason given".to_string()),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QrCodeResults {
    pub qr: String,
    #[serde(default)]
    pub expired: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HistoryResults {
    #[serde(default)]
    pub histories: Vec<TransactionRecord>,
}

//--------------------------------------    Transaction records    -----------------------------------------------------

/// A single mutation from the gateway's transaction history, kept wire-faithful. The string fields
/// are parsed on demand so that one malformed record never poisons the rest of the statement.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransactionRecord {
    /// Timestamp as reported by the gateway. Newer statements use `date`, older ones `tanggal`.
    #[serde(default, alias = "tanggal")]
    pub date: String,
    /// Mutation direction, `IN` or `OUT`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Credited amount with `.` as thousands separator, e.g. `50.007`.
    #[serde(default)]
    pub kredit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keterangan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
}

impl TransactionRecord {
    pub fn direction(&self) -> Direction {
        Direction::from(self.kind.as_str())
    }

    pub fn is_incoming(&self) -> bool {
        matches!(self.direction(), Direction::Incoming)
    }

    /// The mutation timestamp. Naive timestamps are taken as UTC, since the gateway does not
    /// report an offset.
    pub fn timestamp(&self) -> Result<DateTime<Utc>, ZenitsuApiError> {
        parse_mutation_timestamp(&self.date)
    }

    /// The credited amount with separators stripped, so `50.007` is 50007 rupiah.
    pub fn credited_amount(&self) -> Result<Rupiah, ZenitsuApiError> {
        parse_credited_amount(&self.kredit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
    Unknown,
}

impl From<&str> for Direction {
    fn from(value: &str) -> Self {
        match value.trim() {
            "IN" => Direction::Incoming,
            "OUT" => Direction::Outgoing,
            _ => Direction::Unknown,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Incoming => write!(f, "IN"),
            Direction::Outgoing => write!(f, "OUT"),
            Direction::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

//--------------------------------------       Issued QR codes      ----------------------------------------------------

/// The outcome of a successful QR request. The amount and deposit id are echoed from the caller
/// rather than reparsed from the response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IssuedQr {
    pub deposit_id: String,
    pub amount: Rupiah,
    pub qr_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}
