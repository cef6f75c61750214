//! Product records.

use serde::{Deserialize, Serialize};

use dukkan_core::{Price, ProductId, Quantity};

/// The fixed category set offered by entry forms.
///
/// The store deliberately does not enforce membership: categories are
/// validated at the form level only, and older records may carry values
/// outside this list.
pub const CATEGORIES: &[&str] = &[
    "Gıda",
    "İçecek",
    "Temizlik",
    "Kırtasiye",
    "Elektronik",
    "Diğer",
];

/// A product in the catalog.
///
/// Products are immutable once created - there is no edit operation, only
/// delete and re-add. `quantity < 5` marks a product critical; that status
/// is derived at projection time and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned at creation, never reused.
    pub id: ProductId,
    /// Display name, trimmed on entry.
    pub name: String,
    /// Category string; see [`CATEGORIES`].
    pub category: String,
    /// Stock count.
    pub quantity: Quantity,
    /// Unit price.
    pub price: Price,
}

/// A product as it sits in storage.
///
/// Records persisted before id assignment existed lack the `id` field; the
/// startup migration backfills it. Everything else is tolerated with
/// defaults so one sloppy row does not take the whole list down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProduct {
    /// Identifier, absent on legacy rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub quantity: Quantity,
    #[serde(default)]
    pub price: Price,
}

impl StoredProduct {
    /// Whether this row already carries an identifier.
    #[must_use]
    pub const fn has_identifier(&self) -> bool {
        self.id.is_some()
    }

    /// Promote the row to a domain [`Product`], generating an id if absent.
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            id: self.id.unwrap_or_else(ProductId::generate),
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

impl From<Product> for StoredProduct {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            category: product.category,
            quantity: product.quantity,
            price: product.price,
        }
    }
}
