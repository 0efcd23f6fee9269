//! Shared test utilities for `RuralFlow`.
//!
//! This module provides common helper functions for setting up test databases
//! and building sample entries with sensible defaults.

use crate::{
    core::{
        entry::{DEFAULT_REQUIRED_FIELDS, Entry, EntryDraft, validate},
        store,
    },
    entities::product,
    errors::Result,
    service::CollectorService,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A complete, valid draft matching the canonical ingestion scenario:
/// 50 kg of Mountain Wildflower Honey from Galicia.
pub fn sample_draft() -> EntryDraft {
    EntryDraft {
        user_id: Some("maria.garcia".to_string()),
        product_name: Some("Mountain Wildflower Honey".to_string()),
        category: Some("Honey".to_string()),
        subcategory: Some("Wildflower".to_string()),
        quantity: Some(50.0),
        unit: Some("kg".to_string()),
        region: Some("Galicia".to_string()),
    }
}

/// The validated form of [`sample_draft`].
///
/// # Panics
/// Panics if the sample draft ever stops validating, which would be a test bug.
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn sample_entry() -> Entry {
    validate(&sample_draft(), &DEFAULT_REQUIRED_FIELDS).unwrap()
}

/// Sets up a test database containing one ingested sample product.
/// Returns (db, product) for store-level test scenarios.
pub async fn setup_with_product() -> Result<(DatabaseConnection, product::Model)> {
    let db = setup_test_db().await?;
    let (product, _label) = store::create_product(&db, &sample_entry(), "HON-1a2b3c4d").await?;
    Ok((db, product))
}

/// Sets up a collector service over a fresh in-memory database.
pub async fn setup_service() -> Result<CollectorService> {
    let db = setup_test_db().await?;
    Ok(CollectorService::new(db))
}
