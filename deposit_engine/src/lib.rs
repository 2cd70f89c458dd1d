//! Deposit Payment Engine
//!
//! This library contains the core logic for brokering QR-code deposits through an upstream
//! payment gateway. It is split along two seams:
//! 1. Pure deposit mechanics: surcharged amounts ([`UniqueAmount`]), deposit ids ([`DepositId`])
//!    and statement matching ([`find_matching_payment`]). These are synchronous and free of I/O,
//!    so they can be tested exhaustively.
//! 2. The reconciliation API ([`PaymentReconciler`]), which drives those mechanics against any
//!    backend implementing [`DepositGateway`]. The gateway holds no record of which deposit ids
//!    it issued, so settlement is established by matching amounts within a short recency window
//!    rather than by reference. The reconciler itself keeps no state between calls.
mod amounts;
mod deposit_ids;
mod deposit_objects;
mod errors;
mod matching;
mod reconciler;

pub use amounts::{UniqueAmount, MAX_AMOUNT_OFFSET};
pub use deposit_ids::{DepositId, DEPOSIT_ID_PREFIX};
pub use deposit_objects::{PaymentStatus, PendingDeposit};
pub use errors::PaymentEngineError;
pub use matching::{find_matching_payment, MatchedPayment, RECENCY_WINDOW};
pub use reconciler::{DepositGateway, PaymentReconciler, HISTORY_FETCH_COUNT};
