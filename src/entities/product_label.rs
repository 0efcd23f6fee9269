//! Product label entity - Denormalized display snapshot of a product.
//!
//! `label_data` holds the JSON-encoded label payload captured when the product
//! was ingested. The `product_id` column is unique: a product has at most one
//! label, and regeneration replaces the existing row rather than adding one.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product label database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_labels")]
pub struct Model {
    /// Unique identifier for the label row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Generated identifier of the labeled product (unique - one label per product)
    #[sea_orm(unique)]
    pub product_id: String,
    /// JSON-encoded label payload
    pub label_data: String,
    /// When the label was first created
    pub created_at: DateTimeUtc,
    /// When the label was last regenerated
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between labels and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each label belongs to one product
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
