use std::fmt;
use std::str::FromStr;

use crate::errors::StoreError;

/// A monetary amount in dollars.
///
/// Displays as `$` followed by exactly two fraction digits. Rounding is the
/// standard library's fixed-precision formatting of the stored `f64`, which
/// rounds the exact binary value to the nearest two-digit decimal (so
/// `1.005`, stored as `1.00499…`, shows as `$1.00`). Exact binary ties go
/// to the even digit: `0.125` shows as `$0.12`, `0.375` as `$0.38`.
///
/// Negative amounts are accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dollars(f64);

impl Dollars {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Parses a price as sent by clients, e.g. `"9.5"` or `"1e2"`.
///
/// Anything that is not a floating-point literal within `f32` range is
/// rejected with [`StoreError::InvalidPrice`] carrying the raw text. `inf`,
/// `NaN` and magnitudes above `f32::MAX` parse as `f64` but are not prices.
impl FromStr for Dollars {
    type Err = StoreError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && amount.abs() <= f64::from(f32::MAX))
            .map(Dollars)
            .ok_or_else(|| StoreError::InvalidPrice(text.to_string()))
    }
}
