//! Read-only projection of the catalog.
//!
//! A projection is computed from the full product list plus the active
//! query and selection; it owns its rows, so callers can render it after
//! the catalog has moved on. Statistics and the critical panel always
//! cover the whole catalog, not just the rows the query lets through.

use dukkan_core::{Price, ProductId, Quantity, fold_for_search};
use rust_decimal::Decimal;

use crate::models::Product;

/// The active search text and category filter.
///
/// An empty search matches everything; `None` category means no filter.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    pub search: String,
    pub category: Option<String>,
}

/// One product as presented in the main table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: Quantity,
    pub price: Price,
    pub critical: bool,
    pub selected: bool,
}

/// One product as presented in the critical-stock panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalRow {
    pub id: ProductId,
    pub name: String,
    pub quantity: Quantity,
    pub critical: bool,
}

/// Whole-catalog aggregates, independent of any filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub total_products: usize,
    /// Sum of quantities across all products, saturating at the ceiling.
    /// Lenient input coercion can yield extreme counts, so the sum must
    /// not overflow.
    pub total_stock: u64,
    /// Sum of quantity times price across all products.
    pub total_value: Decimal,
}

impl CatalogStats {
    /// The total value formatted for display, e.g. `₺4.50`.
    #[must_use]
    pub fn total_value_display(&self) -> String {
        format!("₺{:.2}", self.total_value)
    }
}

/// Everything a front end needs to render the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductView {
    /// Filtered rows in insertion order.
    pub rows: Vec<ProductRow>,
    pub stats: CatalogStats,
    /// The whole catalog ranked critical-first, unfiltered.
    pub critical: Vec<CriticalRow>,
}

/// Project the catalog through `query` and `selected` into a renderable view.
///
/// Search matches on the accent-folded name; the category filter is an
/// exact match. Filtering affects only the rows; stats and the critical
/// panel always reflect the full catalog. The critical panel ranks
/// products with stock below the threshold ahead of the rest, preserving
/// insertion order within each group.
#[must_use]
pub fn project(products: &[Product], query: &ViewQuery, selected: Option<&ProductId>) -> ProductView {
    let needle = fold_for_search(&query.search);

    let rows = products
        .iter()
        .filter(|p| needle.is_empty() || fold_for_search(&p.name).contains(&needle))
        .filter(|p| {
            query
                .category
                .as_deref()
                .is_none_or(|category| p.category == category)
        })
        .map(|p| ProductRow {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category.clone(),
            quantity: p.quantity,
            price: p.price,
            critical: p.quantity.is_critical(),
            selected: selected == Some(&p.id),
        })
        .collect();

    let stats = CatalogStats {
        total_products: products.len(),
        total_stock: products
            .iter()
            .map(|p| p.quantity.count())
            .fold(0, u64::saturating_add),
        total_value: products
            .iter()
            .map(|p| Decimal::from(p.quantity.count()) * p.price.amount())
            .sum(),
    };

    let mut critical: Vec<CriticalRow> = products
        .iter()
        .map(|p| CriticalRow {
            id: p.id.clone(),
            name: p.name.clone(),
            quantity: p.quantity,
            critical: p.quantity.is_critical(),
        })
        .collect();
    critical.sort_by_key(|row| !row.critical);

    ProductView { rows, stats, critical }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dukkan_core::ProductId;

    use super::*;

    fn product(name: &str, category: &str, quantity: &str, price: &str) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_owned(),
            category: category.to_owned(),
            quantity: Quantity::from_input(quantity),
            price: Price::from_input(price),
        }
    }

    #[test]
    fn test_search_is_accent_and_case_insensitive() {
        let products = vec![
            product("Kalem", "Kırtasiye", "3", "1.5"),
            product("Süt", "Gıda", "10", "20"),
        ];

        let query = ViewQuery {
            search: "KALEM".to_owned(),
            category: None,
        };
        let view = project(&products, &query, None);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows.first().unwrap().name, "Kalem");
    }

    #[test]
    fn test_category_filter_is_exact() {
        let products = vec![
            product("Kalem", "Kırtasiye", "3", "1.5"),
            product("Süt", "Gıda", "10", "20"),
        ];

        let query = ViewQuery {
            search: String::new(),
            category: Some("Gıda".to_owned()),
        };
        let view = project(&products, &query, None);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows.first().unwrap().name, "Süt");
    }

    #[test]
    fn test_search_and_category_combine() {
        let products = vec![
            product("Kalem", "Kırtasiye", "3", "1.5"),
            product("Kalemtraş", "Elektronik", "8", "30"),
        ];

        let query = ViewQuery {
            search: "kalem".to_owned(),
            category: Some("Elektronik".to_owned()),
        };
        let view = project(&products, &query, None);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows.first().unwrap().name, "Kalemtraş");
    }

    #[test]
    fn test_stats_ignore_filter() {
        let products = vec![
            product("Kalem", "Kırtasiye", "3", "1.5"),
            product("Süt", "Gıda", "10", "20"),
        ];

        let query = ViewQuery {
            search: "kalem".to_owned(),
            category: None,
        };
        let view = project(&products, &query, None);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.stats.total_products, 2);
        assert_eq!(view.stats.total_stock, 13);
        assert_eq!(view.stats.total_value_display(), "₺204.50");
    }

    #[test]
    fn test_kalem_scenario() {
        let products = vec![product("Kalem", "Kırtasiye", "3", "1.5")];
        let view = project(&products, &ViewQuery::default(), None);

        assert_eq!(view.stats.total_products, 1);
        assert_eq!(view.stats.total_stock, 3);
        assert_eq!(view.stats.total_value_display(), "₺4.50");
        assert!(view.rows.first().unwrap().critical);
        assert!(view.critical.first().unwrap().critical);
    }

    #[test]
    fn test_critical_panel_ranks_low_stock_first_preserving_order() {
        let products = vec![
            product("Defter", "Kırtasiye", "50", "10"),
            product("Kalem", "Kırtasiye", "3", "1.5"),
            product("Süt", "Gıda", "100", "20"),
            product("Silgi", "Kırtasiye", "2", "2"),
        ];

        let view = project(&products, &ViewQuery::default(), None);
        let names: Vec<&str> = view.critical.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Kalem", "Silgi", "Defter", "Süt"]);
        // The main table keeps insertion order.
        let rows: Vec<&str> = view.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(rows, ["Defter", "Kalem", "Süt", "Silgi"]);
    }

    #[test]
    fn test_critical_panel_ignores_filter() {
        let products = vec![
            product("Kalem", "Kırtasiye", "3", "1.5"),
            product("Silgi", "Kırtasiye", "2", "2"),
        ];

        let query = ViewQuery {
            search: "silgi".to_owned(),
            category: None,
        };
        let view = project(&products, &query, None);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.critical.len(), 2);
    }

    #[test]
    fn test_selected_flag_marks_exactly_one_row() {
        let products = vec![
            product("Kalem", "Kırtasiye", "3", "1.5"),
            product("Süt", "Gıda", "10", "20"),
        ];
        let selected = products.first().unwrap().id.clone();

        let view = project(&products, &ViewQuery::default(), Some(&selected));
        let flagged: Vec<&ProductRow> = view.rows.iter().filter(|r| r.selected).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged.first().unwrap().name, "Kalem");
    }

    #[test]
    fn test_boundary_quantity_not_critical() {
        let products = vec![product("Defter", "Kırtasiye", "5", "10")];
        let view = project(&products, &ViewQuery::default(), None);
        assert!(!view.rows.first().unwrap().critical);
        assert!(!view.critical.first().unwrap().critical);
    }

    #[test]
    fn test_total_stock_saturates_on_extreme_quantities() {
        // Coercion accepts arbitrarily large counts, so the aggregate must
        // cap instead of overflowing.
        let products = vec![
            product("Defter", "Kırtasiye", &u64::MAX.to_string(), "1"),
            product("Kalem", "Kırtasiye", "2", "1.5"),
        ];
        let view = project(&products, &ViewQuery::default(), None);
        assert_eq!(view.stats.total_stock, u64::MAX);
    }

    #[test]
    fn test_empty_catalog_projects_empty_view() {
        let view = project(&[], &ViewQuery::default(), None);
        assert!(view.rows.is_empty());
        assert!(view.critical.is_empty());
        assert_eq!(view.stats, CatalogStats::default());
        assert_eq!(view.stats.total_value_display(), "₺0.00");
    }
}
