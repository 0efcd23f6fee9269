//! Summary reporting - aggregates live inventory into nested statistics.
//!
//! The reporter reads the store through `list_all` and groups products by
//! (category, subcategory) in a single pass. It reflects current quantities,
//! not history, and is deterministic for a given store state; no iteration
//! order is promised on the result maps.

use crate::{core::store, errors::Result};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::collections::HashMap;

use crate::entities::product;

/// Statistics for one (category, subcategory) group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Number of products in the group
    pub product_count: usize,
    /// Sum of the group's current quantities
    pub total_quantity: f64,
}

/// Aggregated view of the whole inventory.
///
/// Invariant: `total_products` equals the sum of every group's
/// `product_count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventorySummary {
    /// Number of products in the store
    pub total_products: usize,
    /// Per-category, per-subcategory statistics
    pub categories: HashMap<String, HashMap<String, GroupSummary>>,
}

/// Generates the inventory summary from the current store contents.
///
/// # Errors
/// Returns an error if the product listing fails.
pub async fn summarize(db: &DatabaseConnection) -> Result<InventorySummary> {
    let products = store::list_all(db).await?;
    Ok(summarize_products(&products))
}

/// Single-pass aggregation of a product listing into nested group statistics.
#[must_use]
pub fn summarize_products(products: &[product::Model]) -> InventorySummary {
    let mut summary = InventorySummary {
        total_products: products.len(),
        categories: HashMap::new(),
    };

    for product in products {
        let group = summary
            .categories
            .entry(product.category.as_str().to_string())
            .or_default()
            .entry(product.subcategory.clone())
            .or_default();
        group.product_count += 1;
        group.total_quantity += product.quantity;
    }

    summary
}
