// Common test utilities for integration tests
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use poem::test::{TestClient, TestResponse};
use poem::Endpoint;
use todolist::api::build_routes;
use todolist::config::DatabaseContext;
use todolist::types::internal::FailurePolicy;
use todolist::AppData;

/// Creates an in-memory SQLite database with migrations applied
pub async fn setup_test_database() -> DatabaseContext {
    let database = DatabaseContext::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    database
        .migrate()
        .await
        .expect("Failed to run migrations");

    database
}

/// Creates application data over a fresh in-memory database
pub async fn setup_app_data(failure_policy: FailurePolicy) -> Arc<AppData> {
    Arc::new(AppData::with_policy(setup_test_database().await, failure_policy))
}

/// Creates a test client for the full route tree
pub fn test_client(app_data: Arc<AppData>, public_dir: &Path) -> TestClient<impl Endpoint> {
    TestClient::new(build_routes(app_data, public_dir))
}

/// Reads a response body as text
pub async fn body_text(response: TestResponse) -> String {
    response
        .0
        .into_body()
        .into_string()
        .await
        .expect("Response body should be UTF-8 text")
}
