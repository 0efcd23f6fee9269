//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod inventory_record;
pub mod product;
pub mod product_label;

// Re-export specific types to avoid conflicts
pub use inventory_record::{
    Column as InventoryRecordColumn, Entity as InventoryRecord, Model as InventoryRecordModel,
};
pub use product::{
    Column as ProductColumn, Entity as Product, Model as ProductModel, ProductCategory,
};
pub use product_label::{
    Column as ProductLabelColumn, Entity as ProductLabel, Model as ProductLabelModel,
};
