use chrono::{DateTime, Utc};
use dpg_common::Rupiah;
use serde::Serialize;
use zenitsu_tools::IssuedQr;

use crate::{amounts::UniqueAmount, deposit_ids::DepositId};

/// Everything a caller needs to present a freshly issued deposit QR code to the customer.
#[derive(Debug, Clone, Serialize)]
pub struct PendingDeposit {
    pub deposit_id: DepositId,
    pub amount: UniqueAmount,
    pub qr_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl PendingDeposit {
    pub fn new(deposit_id: DepositId, amount: UniqueAmount, qr: IssuedQr) -> Self {
        Self { deposit_id, amount, qr_url: qr.qr_url, expires_at: qr.expires_at }
    }
}

/// The outcome of one reconciliation sweep for an expected amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PaymentStatus {
    /// A recent incoming credit of exactly the expected amount was found.
    Paid { amount: Rupiah, paid_at: DateTime<Utc> },
    /// No qualifying credit yet. Callers are expected to poll again.
    Pending,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid { .. })
    }
}
