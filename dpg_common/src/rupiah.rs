use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::op;

/// The separator the gateway uses when it displays rupiah amounts (1000 → "1.000").
pub const THOUSANDS_SEPARATOR: char = '.';

//--------------------------------------      Rupiah        ----------------------------------------------------------
/// A whole-rupiah amount. IDR has no minor units in the deposit flow, so this is a plain integer
/// wrapper. The [`Display`] impl renders the gateway's thousands-separated convention and
/// [`FromStr`] accepts it back, so locally formatted amounts always agree with the gateway's
/// transaction feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Rupiah(i64);

op!(binary Rupiah, Add, add);
op!(binary Rupiah, Sub, sub);
op!(inplace Rupiah, SubAssign, sub_assign);
op!(unary Rupiah, Neg, neg);

impl Mul<i64> for Rupiah {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::from(self.value() * rhs)
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in rupiah: {0}")]
pub struct RupiahConversionError(String);

impl From<i64> for Rupiah {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<u64> for Rupiah {
    type Error = RupiahConversionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > i64::MAX as u64 {
            Err(RupiahConversionError(format!("Value {value} is too large to convert to Rupiah")))
        } else {
            #[allow(clippy::cast_possible_wrap)]
            Ok(Self(value as i64))
        }
    }
}

impl Display for Rupiah {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "-")?;
        }
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(THOUSANDS_SEPARATOR);
            }
            grouped.push(c);
        }
        f.write_str(&grouped)
    }
}

impl FromStr for Rupiah {
    type Err = RupiahConversionError;

    /// Parses an amount as the gateway formats it, i.e. with optional `.` thousands separators.
    /// `"1.000"` and `"1000"` both parse to `Rupiah(1000)`. Anything else is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().replace(THOUSANDS_SEPARATOR, "");
        cleaned
            .parse::<i64>()
            .map(Self)
            .map_err(|e| RupiahConversionError(format!("'{s}' is not a valid rupiah amount. {e}")))
    }
}

impl Rupiah {
    pub fn value(&self) -> i64 {
        self.0
    }
}
