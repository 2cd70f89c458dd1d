use std::fmt::Display;

use chrono::{DateTime, Utc};
use deposit_engine::PendingDeposit;
use dpg_common::Rupiah;
use serde::{Deserialize, Serialize};

/// Request body for both `createqr` and `checkpay`. The amount is the nominal deposit on the way
/// in, and the surcharged amount handed back by `createqr` on the way out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositRequest {
    pub amount: Rupiah,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub deposit_id: String,
    pub amount: Rupiah,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

/// Successful `createqr` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrIssueResponse {
    pub success: bool,
    pub data: NewDepositData,
}

impl From<PendingDeposit> for QrIssueResponse {
    fn from(deposit: PendingDeposit) -> Self {
        Self { success: true, data: NewDepositData::from(deposit) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDepositData {
    pub deposit_id: String,
    /// The surcharged amount the customer must transfer.
    pub amount: Rupiah,
    /// The random surcharge that was added to the requested amount.
    pub offset: i64,
    pub qr_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl From<PendingDeposit> for NewDepositData {
    fn from(deposit: PendingDeposit) -> Self {
        Self {
            deposit_id: deposit.deposit_id.to_string(),
            amount: deposit.amount.final_amount,
            offset: deposit.amount.offset,
            qr_url: deposit.qr_url,
            expires_at: deposit.expires_at,
        }
    }
}

/// `checkpay` response body. Gateway trouble is reported as data, so polling clients always get a
/// 200 with a status they can branch on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PaymentStatusResponse {
    Paid { data: SettledPaymentData },
    Pending,
    Error { message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettledPaymentData {
    pub amount: Rupiah,
    pub paid_at: DateTime<Utc>,
}
