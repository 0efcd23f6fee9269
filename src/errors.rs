use thiserror::Error;

/// Unified error type for the collector core.
///
/// Every variant is recoverable: validation, not-found, and conflict errors are
/// surfaced verbatim to the caller, while `Database` and `Serialization` are
/// reported upstream as generic storage failures.
#[derive(Debug, Error)]
pub enum Error {
    /// An entry failed the ingestion gate (missing field, bad quantity,
    /// unrecognized category). The message is shown to the caller as-is.
    #[error("{message}")]
    Validation {
        /// Human-readable description of the first problem encountered
        message: String,
    },

    /// A lookup or adjustment referenced an unknown product identifier.
    #[error("Product not found: {product_id}")]
    ProductNotFound {
        /// The identifier that was requested
        product_id: String,
    },

    /// A create was attempted with an identifier that already exists.
    #[error("Product ID already exists: {product_id}")]
    DuplicateProductId {
        /// The colliding identifier
        product_id: String,
    },

    /// A subtraction would drive the stored quantity below zero.
    #[error(
        "Insufficient quantity for {product_id}: current {current}, requested {requested}"
    )]
    InsufficientQuantity {
        /// The product whose quantity was adjusted
        product_id: String,
        /// Quantity on hand before the rejected adjustment
        current: f64,
        /// Quantity the caller tried to subtract
        requested: f64,
    },

    /// Configuration error (missing or malformed settings)
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Underlying storage failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Label payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
