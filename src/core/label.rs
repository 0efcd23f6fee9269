//! Label building - denormalized display snapshots of products.
//!
//! A label captures a product's descriptive fields at the instant it was
//! ingested and is persisted as a JSON payload in the `product_labels` table.
//! Each product has at most one label: regeneration goes through
//! [`upsert_label`], which replaces the existing row instead of inserting a
//! second one.

use crate::{
    entities::{ProductCategory, ProductLabel, product, product_label},
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

/// Point-in-time display snapshot of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelData {
    /// Generated identifier of the labeled product
    pub product_id: String,
    /// Display name at ingestion time
    pub product_name: String,
    /// Category at ingestion time
    pub category: ProductCategory,
    /// Subcategory at ingestion time
    pub subcategory: String,
    /// Owning user at ingestion time
    pub user_id: String,
    /// Quantity at ingestion time
    pub quantity: f64,
    /// Unit of measure at ingestion time
    pub unit: String,
    /// Region of origin, if the entry carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,
}

/// Builds the label payload for a product, stamped with the current time.
///
/// The region comes from the originating entry; it is not a column on the
/// product row, so the label is the only place it survives.
#[must_use]
pub fn build_label_data(product: &product::Model, region: Option<&str>) -> LabelData {
    LabelData {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        category: product.category,
        subcategory: product.subcategory.clone(),
        user_id: product.user_id.clone(),
        quantity: product.quantity,
        unit: product.unit.clone(),
        region: region.map(ToString::to_string),
        timestamp: Utc::now(),
    }
}

/// Inserts or replaces the label for a product.
///
/// If a label row already exists for `data.product_id`, its payload and
/// `updated_at` are overwritten; otherwise a new row is inserted. Either way
/// the one-label-per-product invariant holds afterwards.
///
/// # Errors
/// Returns an error if the payload cannot be encoded or the database write fails.
pub async fn upsert_label<C: ConnectionTrait>(
    conn: &C,
    data: &LabelData,
) -> Result<product_label::Model> {
    let payload = serde_json::to_string(data)?;
    let now = Utc::now();

    let existing = ProductLabel::find()
        .filter(product_label::Column::ProductId.eq(data.product_id.as_str()))
        .one(conn)
        .await?;

    if let Some(existing) = existing {
        let mut label: product_label::ActiveModel = existing.into();
        label.label_data = Set(payload);
        label.updated_at = Set(now);
        label.update(conn).await.map_err(Into::into)
    } else {
        let label = product_label::ActiveModel {
            product_id: Set(data.product_id.clone()),
            label_data: Set(payload),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        label.insert(conn).await.map_err(Into::into)
    }
}

/// Retrieves the label row for a product, if one exists.
pub async fn get_label_for_product<C: ConnectionTrait>(
    conn: &C,
    product_id: &str,
) -> Result<Option<product_label::Model>> {
    ProductLabel::find()
        .filter(product_label::Column::ProductId.eq(product_id))
        .one(conn)
        .await
        .map_err(Into::into)
}

/// Decodes a persisted label row back into its payload.
///
/// # Errors
/// Returns an error if the stored JSON does not parse.
pub fn parse_label(label: &product_label::Model) -> Result<LabelData> {
    serde_json::from_str(&label.label_data).map_err(Into::into)
}
