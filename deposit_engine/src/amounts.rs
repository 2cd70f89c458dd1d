use dpg_common::Rupiah;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest random surcharge that can be added to a deposit, in rupiah.
pub const MAX_AMOUNT_OFFSET: i64 = 10;

/// A deposit amount with its disambiguating surcharge applied.
///
/// Payment matching runs on amounts alone, so two customers depositing the same nominal amount
/// inside the same five-minute window would be indistinguishable in the account statement. Every
/// deposit is therefore bumped by a random surcharge of at most [`MAX_AMOUNT_OFFSET`] rupiah
/// before the QR code is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueAmount {
    /// The amount the customer asked to deposit.
    pub base: Rupiah,
    /// The random surcharge, between 0 and [`MAX_AMOUNT_OFFSET`] rupiah inclusive.
    pub offset: i64,
    /// The amount the customer must actually transfer, `base + offset`.
    pub final_amount: Rupiah,
}

impl UniqueAmount {
    /// Applies a random surcharge to `base` using the given entropy source.
    pub fn disambiguate<R: Rng>(base: Rupiah, rng: &mut R) -> Self {
        let offset = rng.gen_range(0..=MAX_AMOUNT_OFFSET);
        Self { base, offset, final_amount: base + Rupiah::from(offset) }
    }

    /// Applies a random surcharge to `base` using the thread-local generator.
    pub fn random(base: Rupiah) -> Self {
        Self::disambiguate(base, &mut rand::thread_rng())
    }
}
