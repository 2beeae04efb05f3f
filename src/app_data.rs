use std::sync::Arc;
use crate::config::{BootstrapSettings, DatabaseContext};
use crate::errors::InternalError;
use crate::stores::ItemStore;
use crate::types::internal::FailurePolicy;

/// Centralized application data following the main-owned stores pattern
///
/// ```text
/// main.rs
///   ↓
/// DatabaseContext::init() + migrate()
///   ↓
/// AppData::init(database, settings)
///   ├─ database (DatabaseContext, closed on shutdown)
///   ├─ item_store (Arc<ItemStore>)
///   └─ failure_policy
///   ↓ wrapped in Arc<AppData>
///   └─ ItemCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub database: DatabaseContext,
    pub item_store: Arc<ItemStore>,
    pub failure_policy: FailurePolicy,
}

impl AppData {
    /// Build the stores over an already connected and migrated database
    pub fn init(database: DatabaseContext, settings: &BootstrapSettings) -> Self {
        Self::with_policy(database, settings.failure_policy())
    }

    pub fn with_policy(database: DatabaseContext, failure_policy: FailurePolicy) -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new(database.clone()));

        Self {
            database,
            item_store,
            failure_policy,
        }
    }

    /// Release the database pool
    pub async fn shutdown(&self) -> Result<(), InternalError> {
        self.database.clone().close().await
    }
}
