//! Subscription package record.
//!
//! The package record belongs to the subscription flow, which is outside
//! this core; the session layer only establishes the default record once at
//! first signup and otherwise treats it as read-only.

use serde::{Deserialize, Serialize};

/// Weekly product limit of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageLimit {
    /// A concrete weekly count.
    Count(u64),
    /// A marker word, in practice `"unlimited"`.
    Text(String),
}

impl PackageLimit {
    /// Whether this limit means "no limit".
    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Text(word) if word == "unlimited")
    }
}

/// A subscription tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Tier name shown in the header.
    pub name: String,
    /// Weekly product limit.
    pub limit: PackageLimit,
}

impl Package {
    /// The free tier every new account starts on.
    #[must_use]
    pub fn default_free() -> Self {
        Self {
            name: "Ücretsiz".to_owned(),
            limit: PackageLimit::Count(100),
        }
    }
}
