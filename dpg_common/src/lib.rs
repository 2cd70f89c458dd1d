mod rupiah;

pub mod op;
mod secret;

pub use rupiah::{Rupiah, RupiahConversionError, THOUSANDS_SEPARATOR};
pub use secret::Secret;
