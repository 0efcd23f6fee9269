//! Product entity - The uniquely identified inventory item derived from an entry.
//!
//! The primary key is the generated category-prefixed identifier (e.g.
//! `HON-1a2b3c4d`), not an autoincrement. `name`, `category`, `subcategory`,
//! and `user_id` are immutable after creation; `quantity` and `unit` are the
//! live state mutated through the inventory store.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed category enumeration for persisted products.
///
/// Free-text categories are rejected at the validation boundary; only these
/// four values ever reach the `products` table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Honey and apiary products
    #[sea_orm(string_value = "honey")]
    Honey,
    /// Cheese and dairy products
    #[sea_orm(string_value = "cheese")]
    Cheese,
    /// Wine and fermented products
    #[sea_orm(string_value = "wine")]
    Wine,
    /// Anything that does not fit the named categories
    #[sea_orm(string_value = "other")]
    Other,
}

impl ProductCategory {
    /// Canonical lowercase name, as persisted in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Honey => "honey",
            Self::Cheese => "cheese",
            Self::Wine => "wine",
            Self::Other => "other",
        }
    }

    /// Parses a caller-supplied category name, case-insensitively.
    /// Returns `None` for anything outside the fixed enumeration.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "honey" => Some(Self::Honey),
            "cheese" => Some(Self::Cheese),
            "wine" => Some(Self::Wine),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Generated category-prefixed identifier (e.g. `HON-1a2b3c4d`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name of the product (e.g. "Mountain Wildflower Honey")
    pub name: String,
    /// Fixed category the product belongs to
    pub category: ProductCategory,
    /// Free-text subcategory (e.g. "Wildflower")
    pub subcategory: String,
    /// Identifier of the owning user
    pub user_id: String,
    /// Current quantity on hand
    pub quantity: f64,
    /// Unit the quantity is measured in (e.g. "kg")
    pub unit: String,
    /// When the product was created
    pub created_at: DateTimeUtc,
    /// When the quantity was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product has an append-only history of inventory records
    #[sea_orm(has_many = "super::inventory_record::Entity")]
    InventoryRecord,
    /// Each product has at most one display label
    #[sea_orm(has_one = "super::product_label::Entity")]
    ProductLabel,
}

impl Related<super::inventory_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryRecord.def()
    }
}

impl Related<super::product_label::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLabel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
