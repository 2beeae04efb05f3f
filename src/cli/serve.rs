use std::sync::Arc;
use poem::listener::TcpListener;
use poem::Server;
use crate::api::build_routes;
use crate::app_data::AppData;
use crate::config::{BootstrapSettings, DatabaseContext};

/// Connect, migrate and serve until Ctrl-C, then close the database
pub async fn run_server(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    let database = DatabaseContext::init(settings).await?;
    database.migrate().await?;

    let app_data = Arc::new(AppData::init(database, settings));
    let app = build_routes(app_data.clone(), settings.public_dir());

    let address = settings.server_address();
    tracing::info!(
        address = %address,
        failure_policy = %settings.failure_policy(),
        "Starting server on http://{}",
        address
    );
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    let served = Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutdown signal received");
            },
            None,
        )
        .await;

    if let Err(e) = app_data.shutdown().await {
        tracing::warn!(error = %e, "Failed to close database cleanly");
    }

    served?;
    Ok(())
}
