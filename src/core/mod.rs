//! Core business logic - framework-agnostic ingestion, inventory, and reporting
//! operations. All database-touching functions are async, take an explicit
//! connection, and return `Result` types; nothing in this module owns a global
//! handle.

/// Raw entry drafts and the validation gate
pub mod entry;
/// Category-prefixed product identifier generation
pub mod identifier;
/// Label payload construction and one-per-product upsert
pub mod label;
/// Nested category/subcategory inventory summaries
pub mod report;
/// The inventory store - the only mutator of product state
pub mod store;
