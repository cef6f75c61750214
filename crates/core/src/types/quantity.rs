//! Stock quantity type.

use serde::{Deserialize, Serialize};

/// Stock level below which a product counts as critical.
pub const CRITICAL_THRESHOLD: u64 = 5;

/// A non-negative stock count.
///
/// Like [`Price`](crate::Price), quantities are coerced from free-form
/// input: invalid or negative values become zero rather than failing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// A quantity of zero.
    pub const ZERO: Self = Self(0);

    /// Create a quantity from a known count.
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    /// Coerce free-form input into a quantity.
    ///
    /// Accepts plain integers and fractional input (truncated); anything
    /// else, including negatives, becomes zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(count) = trimmed.parse::<u64>() {
            return Self(count);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Self(value.trunc() as u64),
            _ => Self::ZERO,
        }
    }

    /// The underlying count.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.0
    }

    /// Whether this stock level is below [`CRITICAL_THRESHOLD`].
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        self.0 < CRITICAL_THRESHOLD
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Quantity {
    fn from(count: u64) -> Self {
        Self(count)
    }
}
