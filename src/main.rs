//! Bootstrap binary for the `RuralFlow` collector service.
//!
//! Initializes tracing, loads configuration, connects to the database, creates
//! any missing tables, and logs the current inventory summary. The request
//! dispatcher that drives the service is an external collaborator; this binary
//! only proves the process can come up cleanly.

use dotenvy::dotenv;
use ruralflow::{
    config,
    errors::Result,
    service::CollectorService,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load application configuration: {e}"))?;
    info!(database_url = %app_config.database_url, "Configuration loaded.");

    // 4. Connect and ensure the schema exists
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ready."))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Bring up the service and report current inventory
    let service = CollectorService::new(db);
    let summary = service
        .get_summary()
        .await
        .inspect_err(|e| error!("Failed to read inventory summary: {e}"))?;
    info!(
        total_products = summary.total_products,
        categories = summary.categories.len(),
        "Collector service ready."
    );

    Ok(())
}
