//! Opaque product identifiers.
//!
//! Identifiers combine a millisecond timestamp with a random suffix, both in
//! base36, so ids generated within the same instant still differ. They are
//! assigned once at creation and never reused.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the random base36 suffix appended to the timestamp.
const SUFFIX_LEN: usize = 6;

/// An opaque, unique product identifier.
///
/// Compared byte-for-byte; callers must not parse structure out of it.
///
/// ## Examples
///
/// ```
/// use dukkan_core::ProductId;
///
/// let a = ProductId::generate();
/// let b = ProductId::generate();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from an existing string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier.
    ///
    /// The timestamp component orders ids roughly by creation time; the
    /// random suffix keeps rapid successive calls distinct.
    #[must_use]
    pub fn generate() -> Self {
        let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .filter_map(|_| char::from_digit(rng.random_range(0..36u32), 36))
            .collect();
        Self(format!("{}{suffix}", to_base36(millis)))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render a value in lowercase base36.
fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        if let Some(c) = char::from_digit(u32::try_from(value % 36).unwrap_or(0), 36) {
            digits.push(c);
        }
        value /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generate_is_unique_across_rapid_calls() {
        let ids: HashSet<ProductId> = (0..1000).map(|_| ProductId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generate_is_lowercase_base36() {
        let id = ProductId::generate();
        assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
        assert!(id.as_str().len() > SUFFIX_LEN);
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("kx2abc12");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"kx2abc12\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display() {
        let id = ProductId::new("abc123");
        assert_eq!(format!("{id}"), "abc123");
    }
}
