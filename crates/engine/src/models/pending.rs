//! Pending-action marker.

/// A one-shot marker for a flow interrupted by a login redirect.
///
/// Consumed read-then-clear on successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// The user wanted to buy a subscription before being sent to log in.
    Buy,
}

impl PendingAction {
    /// The stored marker string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
        }
    }

    /// Parse a stored marker string; unknown markers are ignored.
    #[must_use]
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "buy" => Some(Self::Buy),
            _ => None,
        }
    }
}
