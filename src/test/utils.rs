// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::config::DatabaseContext;
use crate::stores::ItemStore;

/// Creates an in-memory SQLite database with migrations applied
pub async fn setup_test_database() -> DatabaseContext {
    let context = DatabaseContext::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    context
        .migrate()
        .await
        .expect("Failed to run migrations");

    context
}

/// Creates an item store over a fresh in-memory database
pub async fn setup_test_store() -> Arc<ItemStore> {
    Arc::new(ItemStore::new(setup_test_database().await))
}

/// Creates an item store whose every call fails as not connected
pub fn setup_disconnected_store() -> Arc<ItemStore> {
    Arc::new(ItemStore::new(DatabaseContext::from_connection(
        DatabaseConnection::Disconnected,
    )))
}
