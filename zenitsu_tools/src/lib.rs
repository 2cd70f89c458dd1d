mod api;
mod config;
mod error;
mod helpers;

mod data_objects;

pub use api::ZenitsuApi;
pub use config::{ZenitsuConfig, DEFAULT_BASE_URL};
pub use data_objects::{Direction, IssuedQr, TransactionRecord};
pub use error::ZenitsuApiError;
