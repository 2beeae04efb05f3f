mod common;

use todolist::types::internal::FailurePolicy;

#[tokio::test]
async fn test_health_reports_item_count() {
    let public = tempfile::tempdir().unwrap();
    let app_data = common::setup_app_data(FailurePolicy::Redirect).await;
    app_data.item_store.create(Some("Milk")).await.unwrap();
    let cli = common::test_client(app_data, public.path());

    let resp = cli.get("/api/health").send().await;
    resp.assert_status_is_ok();

    let body: serde_json::Value = serde_json::from_str(&common::body_text(resp).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["item_count"], 1);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_is_degraded_after_shutdown() {
    let public = tempfile::tempdir().unwrap();
    let app_data = common::setup_app_data(FailurePolicy::Redirect).await;
    let cli = common::test_client(app_data.clone(), public.path());

    app_data.shutdown().await.unwrap();

    let resp = cli.get("/api/health").send().await;
    resp.assert_status_is_ok();

    let body: serde_json::Value = serde_json::from_str(&common::body_text(resp).await).unwrap();
    assert_eq!(body["status"], "degraded");
    assert!(body.get("item_count").map_or(true, |count| count.is_null()));
}

#[tokio::test]
async fn test_list_page_fails_without_crashing_after_shutdown() {
    let public = tempfile::tempdir().unwrap();
    let app_data = common::setup_app_data(FailurePolicy::Redirect).await;
    let cli = common::test_client(app_data.clone(), public.path());

    app_data.shutdown().await.unwrap();

    cli.get("/").send().await.assert_status(poem::http::StatusCode::INTERNAL_SERVER_ERROR);

    let resp = cli.post("/").form(&[("itemName", "Milk")]).send().await;
    resp.assert_status(poem::http::StatusCode::FOUND);
}
