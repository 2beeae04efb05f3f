use crate::config::{BootstrapSettings, DatabaseContext};
use crate::errors::InternalError;

/// Connect, run pending migrations and close the connection
pub async fn run_migrations(settings: &BootstrapSettings) -> Result<(), InternalError> {
    tracing::info!("Running database migrations...");

    let database = DatabaseContext::init(settings).await?;
    database.migrate().await?;
    database.close().await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
