//! Persisted record types.
//!
//! These are domain types whose serde shape matches the records the store
//! persists; storage-only row variants (such as [`product::StoredProduct`])
//! live alongside the domain type they load into.

pub mod package;
pub mod pending;
pub mod product;
pub mod settings;
pub mod user;

pub use package::{Package, PackageLimit};
pub use pending::PendingAction;
pub use product::{CATEGORIES, Product, StoredProduct};
pub use settings::{Settings, Theme};
pub use user::User;
