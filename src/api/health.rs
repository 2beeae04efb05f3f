use std::sync::Arc;
use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::coordinators::ItemCoordinator;
use crate::types::dto::HealthResponse;

/// Health check API
pub struct HealthApi {
    item_coordinator: Arc<ItemCoordinator>,
}

impl HealthApi {
    pub fn new(item_coordinator: Arc<ItemCoordinator>) -> Self {
        Self { item_coordinator }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports whether the item store answers and how many items it holds
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let (status, item_count) = match self.item_coordinator.item_count().await {
            Ok(count) => ("healthy", Some(count)),
            Err(e) => {
                tracing::warn!(error = %e, "Health check could not reach the item store");
                ("degraded", None)
            }
        };

        Json(HealthResponse {
            status: status.to_string(),
            item_count,
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
