//! Database connection and schema creation using `SeaORM`.
//!
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the `SQLite` schema always matches
//! the Rust structs without hand-written SQL. The connection is established
//! once at process start and injected into the service; nothing in this crate
//! holds a global handle.

use crate::entities::{InventoryRecord, Product, ProductLabel};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the configured database.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `products`, `inventory_records`, and `product_labels` tables
/// from the entity definitions.
///
/// # Errors
/// Returns an error if any table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    let mut record_table = schema.create_table_from_entity(InventoryRecord);
    let mut label_table = schema.create_table_from_entity(ProductLabel);

    // Idempotent so the bootstrap can run against an existing database
    db.execute(builder.build(product_table.if_not_exists()))
        .await?;
    db.execute(builder.build(record_table.if_not_exists()))
        .await?;
    db.execute(builder.build(label_table.if_not_exists())).await?;

    Ok(())
}
