//! In-memory product catalog.
//!
//! The catalog mirrors the persisted product list and owns the transient
//! selection pointer. Every mutation persists through the store before
//! returning, so the in-memory list, storage, and any projection taken
//! afterwards agree.

use dukkan_core::{Price, ProductId, Quantity};

use crate::models::Product;
use crate::store::{StorageBackend, Store, StoreError};

/// Raw entry-form input for a new product.
///
/// All fields are free-form text; coercion never fails (invalid numbers
/// become zero, the name is trimmed). Category membership is the form's
/// concern, not the catalog's.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
}

/// The in-memory product list plus the selection pointer.
///
/// The selection pointer is transient: it is never persisted and holds at
/// most one product id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    selected: Option<ProductId>,
}

impl Catalog {
    /// Load the catalog from the store. Selection starts empty.
    #[must_use]
    pub fn load<B: StorageBackend>(store: &Store<B>) -> Self {
        Self {
            products: store.products(),
            selected: None,
        }
    }

    /// The products in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// The currently selected product id, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&ProductId> {
        self.selected.as_ref()
    }

    /// Create a product from form input, persist, and return the new record.
    ///
    /// Always succeeds given any input: the name is trimmed and the numeric
    /// fields coerce invalid values to zero.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only if persisting the updated list fails.
    pub fn add<B: StorageBackend>(
        &mut self,
        store: &mut Store<B>,
        draft: ProductDraft,
    ) -> Result<Product, StoreError> {
        let product = Product {
            id: ProductId::generate(),
            name: draft.name.trim().to_owned(),
            category: draft.category,
            quantity: Quantity::from_input(&draft.quantity),
            price: Price::from_input(&draft.price),
        };
        self.products.push(product.clone());
        store.set_products(&self.products)?;
        Ok(product)
    }

    /// Delete the product with `id`, if present.
    ///
    /// Clears the selection pointer when it referenced the deleted id.
    /// Returns whether a product was removed; an unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the updated list fails.
    pub fn delete_by_id<B: StorageBackend>(
        &mut self,
        store: &mut Store<B>,
        id: &ProductId,
    ) -> Result<bool, StoreError> {
        let Some(index) = self.products.iter().position(|p| &p.id == id) else {
            return Ok(false);
        };
        self.products.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        store.set_products(&self.products)?;
        Ok(true)
    }

    /// Delete every product and the persisted record, clearing selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if clearing the persisted record fails.
    pub fn delete_all<B: StorageBackend>(&mut self, store: &mut Store<B>) -> Result<(), StoreError> {
        self.products.clear();
        self.selected = None;
        store.clear_products()
    }

    /// Toggle selection of `id`: selecting the already-selected id clears
    /// the pointer, selecting another id moves it.
    pub fn toggle_select(&mut self, id: &ProductId) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
    }
}
