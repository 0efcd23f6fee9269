//! Inventory store - the only component allowed to mutate product state.
//!
//! Every mutation runs inside a single database transaction that covers the
//! product write, its append-only inventory record, and (on create) the label
//! upsert: the quantity change and its history record commit together or not
//! at all. Read-modify-write adjustments happen entirely inside that
//! transaction, so concurrent adjustments against the same product serialize
//! instead of losing updates.

use crate::{
    core::{
        entry::Entry,
        label::{self, LabelData},
    },
    entities::{InventoryRecord, Product, ProductCategory, inventory_record, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Action tag recorded when a product is first ingested.
pub const ACTION_NEW_ENTRY: &str = "new_entry";

/// Quantity-affecting actions supported by [`adjust_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryAction {
    /// Add the given quantity to the current amount
    Add,
    /// Subtract the given quantity; rejected if the result would be negative
    Subtract,
    /// Replace the current amount with the given quantity
    Set,
}

impl InventoryAction {
    /// The action tag persisted on inventory records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Set => "set",
        }
    }

    /// Parses an action name as submitted by a dispatcher.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "set" => Some(Self::Set),
            _ => None,
        }
    }
}

impl std::fmt::Display for InventoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creates a product from a validated entry under the given identifier.
///
/// One transaction inserts the product row, appends a `new_entry` inventory
/// record carrying the initial quantity, and creates the product's label.
/// An identifier that already exists is rejected as a conflict - never
/// silently overwritten.
///
/// # Errors
/// Returns [`Error::DuplicateProductId`] on an identifier collision, or a
/// database error (the whole transaction rolls back).
pub async fn create_product(
    db: &DatabaseConnection,
    entry: &Entry,
    product_id: &str,
) -> Result<(product::Model, LabelData)> {
    let txn = db.begin().await?;

    if Product::find_by_id(product_id).one(&txn).await?.is_some() {
        return Err(Error::DuplicateProductId {
            product_id: product_id.to_string(),
        });
    }

    let now = chrono::Utc::now();
    let product = product::ActiveModel {
        id: Set(product_id.to_string()),
        name: Set(entry.product_name.clone()),
        category: Set(entry.category),
        subcategory: Set(entry.subcategory.clone()),
        user_id: Set(entry.user_id.clone()),
        quantity: Set(entry.quantity),
        unit: Set(entry.unit.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let product = product.insert(&txn).await?;

    let record = inventory_record::ActiveModel {
        product_id: Set(product.id.clone()),
        action: Set(ACTION_NEW_ENTRY.to_string()),
        quantity: Set(entry.quantity),
        timestamp: Set(now),
        notes: Set(Some("Initial product entry".to_string())),
        ..Default::default()
    };
    record.insert(&txn).await?;

    let label_data = label::build_label_data(&product, entry.region.as_deref());
    label::upsert_label(&txn, &label_data).await?;

    txn.commit().await?;

    info!(
        product_id = %product.id,
        category = %product.category,
        quantity = product.quantity,
        "product ingested"
    );
    Ok((product, label_data))
}

/// Applies a quantity adjustment and appends its inventory record atomically.
///
/// The product is loaded, the action applied, and the record appended inside
/// one transaction. `quantity` is the operand and must be finite and
/// non-negative for every action; a `subtract` whose result would be negative
/// is rejected with nothing committed. The appended record carries the
/// *resulting* quantity and a descriptive note.
///
/// # Errors
/// Returns [`Error::Validation`] for a bad operand,
/// [`Error::ProductNotFound`] for an unknown identifier,
/// [`Error::InsufficientQuantity`] when a subtraction would go negative,
/// or a database error (the whole transaction rolls back).
pub async fn adjust_quantity(
    db: &DatabaseConnection,
    product_id: &str,
    quantity: f64,
    action: InventoryAction,
) -> Result<product::Model> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(Error::Validation {
            message: "Invalid quantity value".to_string(),
        });
    }

    let txn = db.begin().await?;

    let product = Product::find_by_id(product_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            product_id: product_id.to_string(),
        })?;

    let new_quantity = match action {
        InventoryAction::Add => product.quantity + quantity,
        InventoryAction::Subtract => {
            let remaining = product.quantity - quantity;
            if remaining < 0.0 {
                return Err(Error::InsufficientQuantity {
                    product_id: product_id.to_string(),
                    current: product.quantity,
                    requested: quantity,
                });
            }
            remaining
        }
        InventoryAction::Set => quantity,
    };

    let unit = product.unit.clone();
    let now = chrono::Utc::now();

    let mut active: product::ActiveModel = product.into();
    active.quantity = Set(new_quantity);
    active.updated_at = Set(now);
    let product = active.update(&txn).await?;

    let record = inventory_record::ActiveModel {
        product_id: Set(product.id.clone()),
        action: Set(action.as_str().to_string()),
        quantity: Set(new_quantity),
        timestamp: Set(now),
        notes: Set(Some(format!("Quantity updated to {new_quantity} {unit}"))),
        ..Default::default()
    };
    record.insert(&txn).await?;

    txn.commit().await?;

    info!(
        product_id = %product.id,
        action = %action,
        new_quantity,
        "inventory adjusted"
    );
    Ok(product)
}

/// Retrieves a product by its generated identifier.
pub async fn get_product(
    db: &DatabaseConnection,
    product_id: &str,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a product's inventory history, most recent first.
///
/// An unknown identifier yields an empty sequence, never an error.
pub async fn get_history(
    db: &DatabaseConnection,
    product_id: &str,
) -> Result<Vec<inventory_record::Model>> {
    InventoryRecord::find()
        .filter(inventory_record::Column::ProductId.eq(product_id))
        .order_by_desc(inventory_record::Column::Timestamp)
        .order_by_desc(inventory_record::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every product, ordered by name, for the summary reporter.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every product in one category, ordered by name.
pub async fn get_products_by_category(
    db: &DatabaseConnection,
    category: ProductCategory,
) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(product::Column::Category.eq(category))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
