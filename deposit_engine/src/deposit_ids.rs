use std::fmt::Display;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEPOSIT_ID_PREFIX: &str = "DEPO-";
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ID_SUFFIX_LEN: usize = 10;

/// Correlation token attached to every QR request, e.g. `DEPO-8F3K2M9QX1`.
///
/// The id is sent to the gateway as the transaction reference, but account mutations do not echo
/// it back, so it plays no part in payment matching. With 36^10 possible suffixes, collisions are
/// rare enough that no uniqueness bookkeeping is done.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositId(pub String);

impl DepositId {
    /// Generates a fresh id from the given entropy source.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut id = String::with_capacity(DEPOSIT_ID_PREFIX.len() + ID_SUFFIX_LEN);
        id.push_str(DEPOSIT_ID_PREFIX);
        for _ in 0..ID_SUFFIX_LEN {
            let i = rng.gen_range(0..ID_ALPHABET.len());
            id.push(ID_ALPHABET[i] as char);
        }
        Self(id)
    }

    /// Generates a fresh id from the thread-local generator.
    pub fn random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DepositId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DepositId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DepositId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
