use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZenitsuApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Gateway credentials are not configured. {0}")]
    MissingCredentials(String),
    #[error("Gateway rejected the request. Status {status}. {message}")]
    Rejected { status: i64, message: String },
    #[error("Could not reach the gateway: {0}")]
    Transport(String),
    #[error("Could not deserialize gateway response: {0}")]
    JsonError(String),
    #[error("Invalid currency amount: {0}")]
    InvalidCurrencyAmount(String),
    #[error("Invalid statement timestamp: {0}")]
    InvalidTimestamp(String),
}
