//! User account records.

use serde::{Deserialize, Serialize};

use dukkan_core::Username;

/// A shop-owner account.
///
/// Accounts are created at signup and never deleted. The password is an
/// opaque string compared by exact match; see DESIGN.md for why it stays
/// that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account name, immutable after signup.
    pub username: Username,
    /// Opaque credential, exact-match compared.
    #[serde(default)]
    pub password: String,
    /// Human-facing name; falls back to the username when empty.
    #[serde(default)]
    pub display: String,
    /// Encoded avatar image (data URL). Lazily backfilled when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Optional free-text shop address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl User {
    /// Minimal stand-in for a session pointer with no matching record.
    ///
    /// Deliberate lenience: partial data loss should not fail the caller.
    #[must_use]
    pub fn stand_in(username: Username) -> Self {
        let display = username.as_str().to_owned();
        Self {
            username,
            password: String::new(),
            display,
            avatar: None,
            address: None,
        }
    }

    /// The name to show in greetings.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.display.is_empty() {
            self.username.as_str()
        } else {
            &self.display
        }
    }
}
