//! Type-safe price representation using decimal arithmetic.
//!
//! Prices come from free-form user input. The coercion contract is lenient
//! on purpose: anything unparsable or negative becomes zero, and callers
//! never see a failure path.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative unit price in the shop currency.
///
/// Backed by [`Decimal`] so sums and the two-decimal display format stay
/// exact (`3 × 1.5` is `4.50`, not `4.499…`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount, clamping negatives to zero.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        if amount.is_sign_negative() {
            Self(Decimal::ZERO)
        } else {
            Self(amount)
        }
    }

    /// Coerce free-form input into a price.
    ///
    /// Missing, unparsable, or negative input becomes zero. This mirrors the
    /// entry-form contract: product creation always succeeds.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        input
            .trim()
            .parse::<Decimal>()
            .map_or(Self::ZERO, Self::new)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}
