//! Entry validation - the gate every raw submission passes before ingestion.
//!
//! A caller submits an [`EntryDraft`] (all fields optional, as they arrive off
//! the wire); [`validate`] checks a configurable set of required fields in a
//! stable left-to-right order, sanity-checks the quantity, and resolves the
//! category against the fixed enumeration. On success it yields an [`Entry`]
//! with every field present and typed. Validation is side-effect free and
//! never touches the store.

use crate::{
    entities::ProductCategory,
    errors::{Error, Result},
};
use serde::Deserialize;

/// Raw, not-yet-validated entry as submitted by a caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryDraft {
    /// Identifier of the submitting user
    pub user_id: Option<String>,
    /// Display name of the product
    pub product_name: Option<String>,
    /// Category name (must resolve to the fixed enumeration)
    pub category: Option<String>,
    /// Free-text subcategory
    pub subcategory: Option<String>,
    /// Initial quantity (must be finite and positive)
    pub quantity: Option<f64>,
    /// Unit the quantity is measured in
    pub unit: Option<String>,
    /// Optional region/location of origin
    pub region: Option<String>,
}

/// A validated entry, ready for ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Identifier of the owning user
    pub user_id: String,
    /// Display name of the product
    pub product_name: String,
    /// Resolved category
    pub category: ProductCategory,
    /// Free-text subcategory
    pub subcategory: String,
    /// Initial quantity
    pub quantity: f64,
    /// Unit of measure
    pub unit: String,
    /// Optional region of origin (kept on the label, not the product row)
    pub region: Option<String>,
}

/// Fields of an entry draft that can be marked as required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    /// `user_id`
    UserId,
    /// `product_name`
    ProductName,
    /// `category`
    Category,
    /// `subcategory`
    Subcategory,
    /// `quantity`
    Quantity,
    /// `unit`
    Unit,
    /// `region`
    Region,
}

impl EntryField {
    /// The field name as it appears in submissions and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserId => "user_id",
            Self::ProductName => "product_name",
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::Quantity => "quantity",
            Self::Unit => "unit",
            Self::Region => "region",
        }
    }
}

/// Default required-field set, checked in this order. `region` is optional.
pub const DEFAULT_REQUIRED_FIELDS: [EntryField; 6] = [
    EntryField::UserId,
    EntryField::ProductName,
    EntryField::Category,
    EntryField::Subcategory,
    EntryField::Quantity,
    EntryField::Unit,
];

fn is_present(draft: &EntryDraft, field: EntryField) -> bool {
    match field {
        EntryField::UserId => draft.user_id.is_some(),
        EntryField::ProductName => draft.product_name.is_some(),
        EntryField::Category => draft.category.is_some(),
        EntryField::Subcategory => draft.subcategory.is_some(),
        EntryField::Quantity => draft.quantity.is_some(),
        EntryField::Unit => draft.unit.is_some(),
        EntryField::Region => draft.region.is_some(),
    }
}

fn missing(field: EntryField) -> Error {
    Error::Validation {
        message: format!("Missing required field: {}", field.as_str()),
    }
}

fn require(value: Option<String>, field: EntryField) -> Result<String> {
    value.ok_or_else(|| missing(field))
}

/// Validates a draft against a required-field set and produces a typed [`Entry`].
///
/// Checks run in a fixed order so the error always names the *first* problem:
/// the required fields left to right, then quantity sanity, then category
/// resolution. A quantity that is present but non-finite or not strictly
/// positive is rejected with a quantity-specific message.
///
/// # Errors
/// Returns [`Error::Validation`] naming the first missing field, an invalid
/// quantity, or an unrecognized category.
pub fn validate(draft: &EntryDraft, required: &[EntryField]) -> Result<Entry> {
    for field in required {
        if !is_present(draft, *field) {
            return Err(missing(*field));
        }
    }

    let quantity = draft.quantity.ok_or_else(|| missing(EntryField::Quantity))?;
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(Error::Validation {
            message: "Invalid quantity value".to_string(),
        });
    }

    let category_raw = draft
        .category
        .clone()
        .ok_or_else(|| missing(EntryField::Category))?;
    let category = ProductCategory::parse(&category_raw).ok_or_else(|| Error::Validation {
        message: format!("Unrecognized category: {category_raw}"),
    })?;

    Ok(Entry {
        user_id: require(draft.user_id.clone(), EntryField::UserId)?,
        product_name: require(draft.product_name.clone(), EntryField::ProductName)?,
        category,
        subcategory: require(draft.subcategory.clone(), EntryField::Subcategory)?,
        quantity,
        unit: require(draft.unit.clone(), EntryField::Unit)?,
        region: draft.region.clone(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::sample_draft;

    #[test]
    fn test_validate_accepts_complete_draft() {
        let entry = validate(&sample_draft(), &DEFAULT_REQUIRED_FIELDS).unwrap();
        assert_eq!(entry.product_name, "Mountain Wildflower Honey");
        assert_eq!(entry.category, ProductCategory::Honey);
        assert_eq!(entry.subcategory, "Wildflower");
        assert_eq!(entry.quantity, 50.0);
        assert_eq!(entry.unit, "kg");
        assert_eq!(entry.region.as_deref(), Some("Galicia"));
    }

    #[test]
    fn test_validate_names_first_missing_field() {
        let mut draft = sample_draft();
        draft.user_id = None;
        draft.unit = None;

        // user_id comes before unit in the check order
        let err = validate(&draft, &DEFAULT_REQUIRED_FIELDS).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: user_id");
    }

    #[test]
    fn test_validate_missing_unit() {
        let mut draft = sample_draft();
        draft.unit = None;

        let err = validate(&draft, &DEFAULT_REQUIRED_FIELDS).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: unit");
    }

    #[test]
    fn test_validate_rejects_nonpositive_quantity() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut draft = sample_draft();
            draft.quantity = Some(bad);

            let err = validate(&draft, &DEFAULT_REQUIRED_FIELDS).unwrap_err();
            assert_eq!(err.to_string(), "Invalid quantity value");
        }
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let mut draft = sample_draft();
        draft.category = Some("olive oil".to_string());

        let err = validate(&draft, &DEFAULT_REQUIRED_FIELDS).unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized category: olive oil");
    }

    #[test]
    fn test_validate_category_is_case_insensitive() {
        let mut draft = sample_draft();
        draft.category = Some("CHEESE".to_string());

        let entry = validate(&draft, &DEFAULT_REQUIRED_FIELDS).unwrap();
        assert_eq!(entry.category, ProductCategory::Cheese);
    }

    #[test]
    fn test_validate_region_is_optional_by_default() {
        let mut draft = sample_draft();
        draft.region = None;

        let entry = validate(&draft, &DEFAULT_REQUIRED_FIELDS).unwrap();
        assert_eq!(entry.region, None);
    }

    #[test]
    fn test_validate_region_can_be_required() {
        let mut required = DEFAULT_REQUIRED_FIELDS.to_vec();
        required.push(EntryField::Region);

        let mut draft = sample_draft();
        draft.region = None;

        let err = validate(&draft, &required).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: region");
    }
}
