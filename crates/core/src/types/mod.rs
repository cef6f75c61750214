//! Core types for Dukkan.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod quantity;
pub mod username;

pub use id::ProductId;
pub use price::Price;
pub use quantity::{CRITICAL_THRESHOLD, Quantity};
pub use username::{Username, UsernameError};
