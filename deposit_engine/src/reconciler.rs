use chrono::Utc;
use dpg_common::Rupiah;
use log::*;
use zenitsu_tools::{IssuedQr, TransactionRecord, ZenitsuApi, ZenitsuApiError};

use crate::{
    amounts::UniqueAmount,
    deposit_ids::DepositId,
    deposit_objects::{PaymentStatus, PendingDeposit},
    errors::PaymentEngineError,
    matching::find_matching_payment,
};

/// How many statement entries one reconciliation sweep inspects.
pub const HISTORY_FETCH_COUNT: u32 = 5;

/// The `DepositGateway` trait covers the two gateway calls the deposit flow needs. The concrete
/// client implements it directly; tests substitute a mock.
#[allow(async_fn_in_trait)]
pub trait DepositGateway {
    /// Asks the gateway to issue a QR code over `amount` rupiah, tagged with `deposit_id`.
    async fn issue_qr(&self, deposit_id: &DepositId, amount: Rupiah) -> Result<IssuedQr, ZenitsuApiError>;

    /// Fetches the most recent `count` account mutations, newest first.
    async fn recent_transactions(&self, count: u32) -> Result<Vec<TransactionRecord>, ZenitsuApiError>;
}

impl DepositGateway for ZenitsuApi {
    async fn issue_qr(&self, deposit_id: &DepositId, amount: Rupiah) -> Result<IssuedQr, ZenitsuApiError> {
        self.create_qr(deposit_id.as_str(), amount).await
    }

    async fn recent_transactions(&self, count: u32) -> Result<Vec<TransactionRecord>, ZenitsuApiError> {
        self.transaction_history(count).await
    }
}

/// Drives the deposit lifecycle against a payment gateway: QR issuance on the way in, statement
/// sweeps on the way out. The reconciler holds no state between calls.
#[derive(Clone)]
pub struct PaymentReconciler<B> {
    gateway: B,
}

impl<B> PaymentReconciler<B>
where B: DepositGateway
{
    pub fn new(gateway: B) -> Self {
        Self { gateway }
    }

    /// Issues a QR code for a new deposit over `amount` rupiah.
    ///
    /// The amount is bumped by a random surcharge before it reaches the gateway, so that
    /// concurrent deposits over the same nominal amount settle to distinguishable credits. The
    /// customer must transfer the surcharged amount, which is echoed in the result.
    pub async fn issue_deposit_qr(&self, amount: Rupiah) -> Result<PendingDeposit, PaymentEngineError> {
        if amount.value() <= 0 {
            return Err(PaymentEngineError::NonPositiveAmount(amount));
        }
        let unique = UniqueAmount::random(amount);
        let deposit_id = DepositId::random();
        debug!("💰️ Deposit {deposit_id}: {} rupiah requested, surcharge of {}", unique.base, unique.offset);
        let qr = self.gateway.issue_qr(&deposit_id, unique.final_amount).await?;
        info!("💰️ Deposit {deposit_id} is awaiting a payment of {} rupiah", unique.final_amount);
        Ok(PendingDeposit::new(deposit_id, unique, qr))
    }

    /// Sweeps the latest account mutations for an incoming credit of exactly `expected` rupiah.
    /// `expected` is the surcharged amount handed out by [`Self::issue_deposit_qr`].
    ///
    /// The sweep is read-only and idempotent. A credit keeps matching for as long as it stays
    /// inside the recency window, so callers that need exactly-once settlement must record the
    /// first `Paid` result themselves.
    pub async fn check_payment(&self, expected: Rupiah) -> Result<PaymentStatus, PaymentEngineError> {
        if expected.value() <= 0 {
            return Err(PaymentEngineError::NonPositiveAmount(expected));
        }
        trace!("🔄️💰️ Sweeping the statement for a credit of {expected} rupiah");
        let records = self.gateway.recent_transactions(HISTORY_FETCH_COUNT).await?;
        let status = match find_matching_payment(&records, expected, Utc::now()) {
            Some(payment) => {
                info!("🔄️✅️ Found a credit of {} rupiah, paid at {}", payment.amount, payment.paid_at);
                PaymentStatus::Paid { amount: payment.amount, paid_at: payment.paid_at }
            },
            None => {
                debug!("🔄️💰️ No recent credit of {expected} rupiah among {} mutations", records.len());
                PaymentStatus::Pending
            },
        };
        Ok(status)
    }
}
