use std::sync::Arc;
use chrono::Local;
use poem::http::{header, StatusCode};
use poem::web::{Data, Form, Html, Path};
use poem::{handler, IntoResponse, Response};
use crate::api::pages::IndexPage;
use crate::coordinators::ItemCoordinator;
use crate::types::dto::CreateItemForm;
use crate::types::internal::{ActionOutcome, FailurePolicy};

/// Per-application state shared by the item handlers
#[derive(Clone)]
pub struct ItemsState {
    pub item_coordinator: Arc<ItemCoordinator>,
    pub failure_policy: FailurePolicy,
}

/// `GET /` - render the list page
#[handler]
pub async fn list_items(Data(state): Data<&ItemsState>) -> Response {
    let items = match state.item_coordinator.list_items().await {
        Ok(items) => items,
        Err(_) => return plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Could not load the to-do list"),
    };

    match IndexPage::new(Local::now(), items).render_html() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render list page");
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Could not render the to-do list")
        }
    }
}

/// `POST /` - add the item named in the `itemName` form field
#[handler]
pub async fn create_item(
    Data(state): Data<&ItemsState>,
    form: poem::Result<Form<CreateItemForm>>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable item form body");
            CreateItemForm::default()
        }
    };

    let outcome = state.item_coordinator.submit_item(form).await;
    respond(state.failure_policy, outcome)
}

/// `GET /delete/:id` - remove one item; always answered exactly once
#[handler]
pub async fn delete_item(Data(state): Data<&ItemsState>, Path(id): Path<String>) -> Response {
    let outcome = state.item_coordinator.remove_item(&id).await;
    respond(state.failure_policy, outcome)
}

/// Map an action outcome to the response dictated by `policy`
pub fn respond<T>(policy: FailurePolicy, outcome: ActionOutcome<T>) -> Response {
    tracing::debug!(outcome = outcome.kind(), policy = %policy, "Answering item action");

    match (policy, outcome) {
        (FailurePolicy::Redirect, _)
        | (_, ActionOutcome::Completed(_))
        | (_, ActionOutcome::NotFound) => redirect_home(),
        (FailurePolicy::Status, ActionOutcome::Rejected(error)) => {
            plain_text(StatusCode::UNPROCESSABLE_ENTITY, &error.to_string())
        }
        (FailurePolicy::Status, ActionOutcome::Unavailable(_)) => {
            plain_text(StatusCode::SERVICE_UNAVAILABLE, "The to-do list is temporarily unavailable")
        }
    }
}

/// `302 Found` back to the list page
pub fn redirect_home() -> Response {
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, "/")
        .finish()
}

fn plain_text(status: StatusCode, message: &str) -> Response {
    Response::builder()
        .status(status)
        .content_type("text/plain; charset=utf-8")
        .body(message.to_string())
}
