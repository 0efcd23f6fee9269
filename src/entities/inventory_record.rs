//! Inventory record entity - Append-only audit trail of quantity changes.
//!
//! Each record references a product by its generated identifier and carries an
//! action tag (`"new_entry"`, `"add"`, `"subtract"`, `"set"`), the quantity on
//! hand after the action, a timestamp, and an optional free-text note.
//! Records are never updated or deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_records")]
pub struct Model {
    /// Unique identifier for the record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Generated identifier of the product this record belongs to
    pub product_id: String,
    /// Action tag: `"new_entry"`, `"add"`, `"subtract"`, or `"set"`
    pub action: String,
    /// Quantity on hand after the action was applied
    pub quantity: f64,
    /// When the action happened
    pub timestamp: DateTimeUtc,
    /// Optional human-readable note describing the change
    pub notes: Option<String>,
}

/// Defines relationships between inventory records and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each record belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
