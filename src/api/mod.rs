// API layer - HTTP endpoints
pub mod health;
pub mod items;
pub mod pages;

use std::path::Path;
use std::sync::Arc;

use poem::endpoint::StaticFilesEndpoint;
use poem::{get, Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

pub use health::HealthApi;
pub use items::ItemsState;

use crate::app_data::AppData;
use crate::coordinators::ItemCoordinator;

/// Compose every route of the application
///
/// * `/` and `/delete/:id` - the server-rendered list
/// * `/api/health` - JSON health check, documented at `/swagger`
/// * anything else - static files from `public_dir`
pub fn build_routes(app_data: Arc<AppData>, public_dir: &Path) -> impl Endpoint {
    let item_coordinator = Arc::new(ItemCoordinator::new(app_data.clone()));

    let api_service = OpenApiService::new(
        HealthApi::new(item_coordinator.clone()),
        "To-do list",
        env!("CARGO_PKG_VERSION"),
    )
    .server("/api");
    let ui = api_service.swagger_ui();

    let state = ItemsState {
        item_coordinator,
        failure_policy: app_data.failure_policy,
    };

    Route::new()
        .at("/", get(items::list_items).post(items::create_item))
        .at("/delete/:id", get(items::delete_item))
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .at("/*path", StaticFilesEndpoint::new(public_dir))
        .data(state)
}
