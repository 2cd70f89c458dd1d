use dpg_common::Rupiah;
use thiserror::Error;
use zenitsu_tools::ZenitsuApiError;

#[derive(Debug, Error)]
pub enum PaymentEngineError {
    #[error("Deposit amounts must be positive, not {0} rupiah")]
    NonPositiveAmount(Rupiah),
    #[error("The payment gateway call failed. {0}")]
    GatewayError(#[from] ZenitsuApiError),
}
