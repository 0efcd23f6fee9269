//! Collector service - the narrow boundary a request dispatcher talks to.
//!
//! [`CollectorService`] owns an injected database connection (acquired once at
//! process start) and exposes the four public operations: submit an entry,
//! adjust inventory, fetch the summary, and fetch product detail. Mutating
//! operations return structured outcomes rather than raising: recoverable
//! problems (validation, not-found, conflicts) surface their message verbatim,
//! while storage failures are logged here and replaced with a generic message
//! so internals never leak to the caller.

use crate::{
    core::{
        entry::{self, EntryDraft},
        identifier,
        label::{self, LabelData},
        report::{self, InventorySummary},
        store::{self, InventoryAction},
    },
    entities::{inventory_record, product},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::error;

/// Outcome status of a mutating service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The operation was applied
    Success,
    /// The operation was rejected; `message` explains why
    Error,
}

/// Result of [`CollectorService::submit_entry`].
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    /// Whether the entry was ingested
    pub status: Status,
    /// Identifier assigned to the new product, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Confirmation or rejection message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The label snapshot created for the product, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelData>,
}

impl SubmitOutcome {
    fn rejected(message: String) -> Self {
        Self {
            status: Status::Error,
            product_id: None,
            message: Some(message),
            label: None,
        }
    }
}

/// Result of [`CollectorService::adjust_inventory`].
#[derive(Debug, Clone, Serialize)]
pub struct AdjustOutcome {
    /// Whether the adjustment was applied
    pub status: Status,
    /// Quantity on hand after the adjustment, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_quantity: Option<f64>,
    /// Rejection message, on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AdjustOutcome {
    fn rejected(message: String) -> Self {
        Self {
            status: Status::Error,
            new_quantity: None,
            message: Some(message),
        }
    }
}

/// Everything known about one product: current row, label snapshot, history.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    /// The live product row
    pub product: product::Model,
    /// The label snapshot, if one was persisted
    pub label: Option<LabelData>,
    /// Inventory history, most recent first
    pub history: Vec<inventory_record::Model>,
}

/// Maps an internal error to the message shown to callers.
/// Storage and encoding failures are logged and genericized.
fn client_message(err: &Error) -> String {
    match err {
        Error::Database(db_err) => {
            error!(error = %db_err, "storage failure during service call");
            "Internal storage error".to_string()
        }
        Error::Serialization(ser_err) => {
            error!(error = %ser_err, "label encoding failure during service call");
            "Internal storage error".to_string()
        }
        other => other.to_string(),
    }
}

/// The ingestion core's service facade.
pub struct CollectorService {
    db: DatabaseConnection,
}

impl CollectorService {
    /// Wraps an already-established database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates a raw draft, assigns an identifier, and ingests the product.
    ///
    /// On success the outcome carries the generated `product_id` and the label
    /// snapshot; on rejection it carries the first validation problem or the
    /// conflict explanation.
    pub async fn submit_entry(&self, draft: &EntryDraft) -> SubmitOutcome {
        let entry = match entry::validate(draft, &entry::DEFAULT_REQUIRED_FIELDS) {
            Ok(entry) => entry,
            Err(err) => return SubmitOutcome::rejected(client_message(&err)),
        };

        let product_id = identifier::generate_product_id(entry.category.as_str());
        match store::create_product(&self.db, &entry, &product_id).await {
            Ok((product, label)) => SubmitOutcome {
                status: Status::Success,
                product_id: Some(product.id),
                message: Some("Product successfully processed and labeled".to_string()),
                label: Some(label),
            },
            Err(err) => SubmitOutcome::rejected(client_message(&err)),
        }
    }

    /// Applies an add/subtract/set adjustment to a product's quantity.
    pub async fn adjust_inventory(
        &self,
        product_id: &str,
        quantity: f64,
        action: InventoryAction,
    ) -> AdjustOutcome {
        match store::adjust_quantity(&self.db, product_id, quantity, action).await {
            Ok(product) => AdjustOutcome {
                status: Status::Success,
                new_quantity: Some(product.quantity),
                message: None,
            },
            Err(err) => AdjustOutcome::rejected(client_message(&err)),
        }
    }

    /// Aggregates current inventory into the nested category/subcategory summary.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub async fn get_summary(&self) -> Result<InventorySummary> {
        report::summarize(&self.db).await
    }

    /// Retrieves a product's row, label snapshot, and full history.
    /// Returns `Ok(None)` for an unknown identifier.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or a persisted label
    /// fails to decode.
    pub async fn get_product_detail(&self, product_id: &str) -> Result<Option<ProductDetail>> {
        let Some(product) = store::get_product(&self.db, product_id).await? else {
            return Ok(None);
        };

        let label = match label::get_label_for_product(&self.db, product_id).await? {
            Some(row) => Some(label::parse_label(&row)?),
            None => None,
        };
        let history = store::get_history(&self.db, product_id).await?;

        Ok(Some(ProductDetail {
            product,
            label,
            history,
        }))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{sample_draft, setup_service};

    fn assert_id_format(product_id: &str, prefix: &str) {
        let (head, tail) = product_id.split_once('-').unwrap();
        assert_eq!(head, prefix);
        assert_eq!(tail.len(), 8);
        assert!(
            tail.chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[tokio::test]
    async fn test_submit_entry_scenario() -> crate::errors::Result<()> {
        let service = setup_service().await?;

        let outcome = service.submit_entry(&sample_draft()).await;
        assert_eq!(outcome.status, Status::Success);
        assert_id_format(outcome.product_id.as_deref().unwrap(), "HON");
        assert_eq!(
            outcome.message.as_deref(),
            Some("Product successfully processed and labeled")
        );

        let summary = service.get_summary().await?;
        assert_eq!(summary.total_products, 1);
        let group = &summary.categories["honey"]["Wildflower"];
        assert_eq!(group.product_count, 1);
        assert_eq!(group.total_quantity, 50.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_submit_entry_missing_field_names_it() -> crate::errors::Result<()> {
        let service = setup_service().await?;

        let mut draft = sample_draft();
        draft.product_name = None;

        let outcome = service.submit_entry(&draft).await;
        assert_eq!(outcome.status, Status::Error);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Missing required field: product_name")
        );
        assert!(outcome.product_id.is_none());

        // Nothing was ingested
        assert_eq!(service.get_summary().await?.total_products, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_submit_entry_invalid_quantity_message() -> crate::errors::Result<()> {
        let service = setup_service().await?;

        let mut draft = sample_draft();
        draft.quantity = Some(-3.0);

        let outcome = service.submit_entry(&draft).await;
        assert_eq!(outcome.status, Status::Error);
        assert_eq!(outcome.message.as_deref(), Some("Invalid quantity value"));

        Ok(())
    }

    #[tokio::test]
    async fn test_two_submissions_accumulate_in_summary() -> crate::errors::Result<()> {
        let service = setup_service().await?;

        service.submit_entry(&sample_draft()).await;
        let mut second = sample_draft();
        second.quantity = Some(30.0);
        service.submit_entry(&second).await;

        let summary = service.get_summary().await?;
        let group = &summary.categories["honey"]["Wildflower"];
        assert_eq!(summary.total_products, 2);
        assert_eq!(group.product_count, 2);
        assert_eq!(group.total_quantity, 80.0);

        let group_count_sum: usize = summary
            .categories
            .values()
            .flat_map(|subcategories| subcategories.values())
            .map(|g| g.product_count)
            .sum();
        assert_eq!(summary.total_products, group_count_sum);

        Ok(())
    }

    #[tokio::test]
    async fn test_adjust_inventory_success() -> crate::errors::Result<()> {
        let service = setup_service().await?;
        let product_id = service
            .submit_entry(&sample_draft())
            .await
            .product_id
            .unwrap();

        let outcome = service
            .adjust_inventory(&product_id, 20.0, InventoryAction::Subtract)
            .await;
        assert_eq!(outcome.status, Status::Success);
        assert_eq!(outcome.new_quantity, Some(30.0));

        Ok(())
    }

    #[tokio::test]
    async fn test_adjust_inventory_unknown_product() -> crate::errors::Result<()> {
        let service = setup_service().await?;

        let outcome = service
            .adjust_inventory("HON-ffffffff", 10.0, InventoryAction::Add)
            .await;
        assert_eq!(outcome.status, Status::Error);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Product not found: HON-ffffffff")
        );
        assert!(outcome.new_quantity.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_adjust_inventory_conflict_leaves_state_untouched() -> crate::errors::Result<()> {
        let service = setup_service().await?;

        let mut draft = sample_draft();
        draft.quantity = Some(10.0);
        let product_id = service.submit_entry(&draft).await.product_id.unwrap();

        let outcome = service
            .adjust_inventory(&product_id, 20.0, InventoryAction::Subtract)
            .await;
        assert_eq!(outcome.status, Status::Error);

        let detail = service.get_product_detail(&product_id).await?.unwrap();
        assert_eq!(detail.product.quantity, 10.0);
        assert_eq!(detail.history.len(), 1); // only the new_entry record

        Ok(())
    }

    #[tokio::test]
    async fn test_product_detail_round_trip() -> crate::errors::Result<()> {
        let service = setup_service().await?;
        let draft = sample_draft();
        let product_id = service.submit_entry(&draft).await.product_id.unwrap();

        let detail = service.get_product_detail(&product_id).await?.unwrap();
        let label = detail.label.unwrap();

        assert_eq!(Some(label.product_name), draft.product_name);
        assert_eq!(label.category.as_str(), "honey");
        assert_eq!(Some(label.subcategory), draft.subcategory);
        assert_eq!(Some(label.user_id), draft.user_id);
        assert_eq!(Some(label.quantity), draft.quantity);
        assert_eq!(Some(label.unit), draft.unit);
        assert_eq!(label.region, draft.region);

        assert_eq!(detail.history.len(), 1);
        assert_eq!(detail.history[0].action, "new_entry");

        Ok(())
    }

    #[tokio::test]
    async fn test_product_detail_unknown_id() -> crate::errors::Result<()> {
        let service = setup_service().await?;
        assert!(service.get_product_detail("CHE-00000000").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_summary_idempotent_between_mutations() -> crate::errors::Result<()> {
        let service = setup_service().await?;
        service.submit_entry(&sample_draft()).await;

        let first = service.get_summary().await?;
        let second = service.get_summary().await?;
        assert_eq!(first, second);

        Ok(())
    }
}
