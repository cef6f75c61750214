//! Dukkan Core - Shared types library.
//!
//! This crate provides common types used across all Dukkan components:
//! - `engine` - Store, catalog, session, and view-projection logic
//! - front ends - Any presentation layer drawing the projected view
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, usernames, quantities, and prices
//! - [`normalize`] - Case/diacritic-insensitive text folding for search

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod normalize;
pub mod types;

pub use normalize::fold_for_search;
pub use types::*;
