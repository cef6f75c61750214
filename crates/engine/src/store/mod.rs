//! Persistent key-value store.
//!
//! The store mirrors the browser-local-storage model the data originated in:
//! a flat string key-value space holding one JSON document per record family
//! (plus the raw current-user pointer). [`Store`] layers typed accessors on
//! top of any [`StorageBackend`].
//!
//! # Read tolerance
//!
//! Reads never fail the caller. A missing or malformed stored value degrades
//! to the empty/default collection with a `tracing` warning - corrupt storage
//! must not crash the application. Writes do propagate [`StoreError`].

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use serde::Serialize;
use serde::de::DeserializeOwned;

use dukkan_core::Username;

use crate::models::{Package, PendingAction, Product, Settings, StoredProduct, User};

/// Storage keys, wire-compatible with existing persisted data.
pub mod keys {
    /// Ordered product list.
    pub const PRODUCTS: &str = "products";
    /// Ordered user list.
    pub const USERS: &str = "dukkan_users";
    /// Raw username of the logged-in user.
    pub const CURRENT_USER: &str = "dukkan_current_user";
    /// Display settings record.
    pub const SETTINGS: &str = "dukkan_settings";
    /// Subscription package record.
    pub const PACKAGE: &str = "dukkan_package";
    /// One-shot pending-action marker.
    pub const PENDING_ACTION: &str = "dukkan_temp_action";
}

/// Errors that can occur when writing to storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected the write (quota, I/O, ...).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A flat string key-value storage backend.
///
/// Implementations must make each `set` observable atomically: readers see
/// either the previous value or the full new value, never a partial write.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the removal cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Typed repository over a [`StorageBackend`].
#[derive(Debug)]
pub struct Store<B> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    /// Wrap a backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read and deserialize a JSON record, degrading to `None` on corruption.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(key, %error, "discarding malformed stored value");
                None
            }
        }
    }

    /// Serialize and store a JSON record.
    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Load the product list in insertion order.
    ///
    /// Legacy rows lacking an id get one assigned in memory; run
    /// [`Self::migrate_product_ids`] at startup to persist the assignment.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read_json::<Vec<StoredProduct>>(keys::PRODUCTS)
            .unwrap_or_default()
            .into_iter()
            .map(StoredProduct::into_product)
            .collect()
    }

    /// Persist the product list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the backend write fails.
    pub fn set_products(&mut self, products: &[Product]) -> Result<(), StoreError> {
        self.write_json(keys::PRODUCTS, &products)
    }

    /// Remove the persisted product list entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the removal cannot be persisted.
    pub fn clear_products(&mut self) -> Result<(), StoreError> {
        self.backend.remove(keys::PRODUCTS)
    }

    /// One-time startup migration: assign ids to legacy product rows.
    ///
    /// Rewrites the stored list only if at least one row changed, and
    /// returns the number of rows migrated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the rewritten list cannot be persisted.
    pub fn migrate_product_ids(&mut self) -> Result<usize, StoreError> {
        let rows = self
            .read_json::<Vec<StoredProduct>>(keys::PRODUCTS)
            .unwrap_or_default();
        let migrated = rows.iter().filter(|row| !row.has_identifier()).count();
        if migrated == 0 {
            return Ok(0);
        }

        let products: Vec<Product> = rows.into_iter().map(StoredProduct::into_product).collect();
        self.set_products(&products)?;
        Ok(migrated)
    }

    // =========================================================================
    // Users & session pointer
    // =========================================================================

    /// Load the user list.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.read_json(keys::USERS).unwrap_or_default()
    }

    /// Persist the user list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the backend write fails.
    pub fn set_users(&mut self, users: &[User]) -> Result<(), StoreError> {
        self.write_json(keys::USERS, &users)
    }

    /// The username the session pointer marks as logged in, if any.
    ///
    /// The pointer is stored as a raw string, not JSON.
    #[must_use]
    pub fn current_user(&self) -> Option<Username> {
        let raw = self.backend.get(keys::CURRENT_USER)?;
        match Username::parse(&raw) {
            Ok(username) => Some(username),
            Err(error) => {
                tracing::warn!(%error, "discarding malformed session pointer");
                None
            }
        }
    }

    /// Mark a username as the current session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend write fails.
    pub fn set_current_user(&mut self, username: &Username) -> Result<(), StoreError> {
        self.backend.set(keys::CURRENT_USER, username.as_str())
    }

    /// Clear the session pointer.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the removal cannot be persisted.
    pub fn clear_current_user(&mut self) -> Result<(), StoreError> {
        self.backend.remove(keys::CURRENT_USER)
    }

    // =========================================================================
    // Settings, package, pending action
    // =========================================================================

    /// Load the settings record, defaulting when absent or malformed.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.read_json(keys::SETTINGS).unwrap_or_default()
    }

    /// Persist the settings record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the backend write fails.
    pub fn set_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.write_json(keys::SETTINGS, settings)
    }

    /// Load the subscription package record, if present.
    #[must_use]
    pub fn package(&self) -> Option<Package> {
        self.read_json(keys::PACKAGE)
    }

    /// Persist the subscription package record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the backend write fails.
    pub fn set_package(&mut self, package: &Package) -> Result<(), StoreError> {
        self.write_json(keys::PACKAGE, package)
    }

    /// Record a pending action to resume after login.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend write fails.
    pub fn set_pending_action(&mut self, action: PendingAction) -> Result<(), StoreError> {
        self.backend.set(keys::PENDING_ACTION, action.as_str())
    }

    /// Consume the pending-action marker (read-then-clear).
    ///
    /// The marker is cleared even when it holds an unknown value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if clearing the marker cannot be persisted.
    pub fn take_pending_action(&mut self) -> Result<Option<PendingAction>, StoreError> {
        let Some(raw) = self.backend.get(keys::PENDING_ACTION) else {
            return Ok(None);
        };
        self.backend.remove(keys::PENDING_ACTION)?;
        Ok(PendingAction::from_str_opt(&raw))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dukkan_core::{Price, ProductId, Quantity};

    use super::*;
    use crate::i18n::Language;

    fn store() -> Store<MemoryBackend> {
        Store::new(MemoryBackend::new())
    }

    fn product(id: &str, name: &str, quantity: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            category: "Kırtasiye".to_owned(),
            quantity: Quantity::new(quantity),
            price: Price::from_input("1.5"),
        }
    }

    #[test]
    fn test_products_roundtrip_preserves_order() {
        let mut store = store();
        let list = vec![product("a", "Kalem", 3), product("b", "Silgi", 9)];
        store.set_products(&list).unwrap();
        assert_eq!(store.products(), list);
    }

    #[test]
    fn test_missing_products_key_is_empty_list() {
        assert!(store().products().is_empty());
    }

    #[test]
    fn test_corrupt_products_degrade_to_empty_list() {
        let mut store = store();
        store.backend.set(keys::PRODUCTS, "{not json").unwrap();
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_migration_assigns_ids_and_rewrites_once() {
        let mut store = store();
        store
            .backend
            .set(
                keys::PRODUCTS,
                r#"[{"name":"Kalem","category":"Kırtasiye","quantity":3,"price":"1.5"},
                    {"id":"kx1","name":"Silgi","category":"Kırtasiye","quantity":9,"price":"2"}]"#,
            )
            .unwrap();

        assert_eq!(store.migrate_product_ids().unwrap(), 1);

        let products = store.products();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| !p.id.as_str().is_empty()));
        assert!(products.iter().any(|p| p.id.as_str() == "kx1"));

        // Second run finds nothing to do.
        assert_eq!(store.migrate_product_ids().unwrap(), 0);
    }

    #[test]
    fn test_migration_noop_leaves_storage_untouched() {
        let mut store = store();
        assert_eq!(store.migrate_product_ids().unwrap(), 0);
        assert!(store.backend.get(keys::PRODUCTS).is_none());
    }

    #[test]
    fn test_current_user_raw_string_roundtrip() {
        let mut store = store();
        assert!(store.current_user().is_none());

        let ali = Username::parse("ali").unwrap();
        store.set_current_user(&ali).unwrap();
        assert_eq!(store.backend.get(keys::CURRENT_USER).unwrap(), "ali");
        assert_eq!(store.current_user(), Some(ali));

        store.clear_current_user().unwrap();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_settings_default_on_corruption() {
        let mut store = store();
        store.backend.set(keys::SETTINGS, "][").unwrap();
        assert_eq!(store.settings(), Settings::default());

        let settings = Settings {
            language: Language::En,
            ..Settings::default()
        };
        store.set_settings(&settings).unwrap();
        assert_eq!(store.settings(), settings);
    }

    #[test]
    fn test_pending_action_read_then_clear() {
        let mut store = store();
        assert_eq!(store.take_pending_action().unwrap(), None);

        store.set_pending_action(PendingAction::Buy).unwrap();
        assert_eq!(store.take_pending_action().unwrap(), Some(PendingAction::Buy));
        // Consumed exactly once.
        assert_eq!(store.take_pending_action().unwrap(), None);
    }

    #[test]
    fn test_unknown_pending_marker_cleared_and_ignored() {
        let mut store = store();
        store.backend.set(keys::PENDING_ACTION, "sell").unwrap();
        assert_eq!(store.take_pending_action().unwrap(), None);
        assert!(store.backend.get(keys::PENDING_ACTION).is_none());
    }
}
