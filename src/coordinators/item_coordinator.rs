use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::stores::ItemStore;
use crate::types::db::item;
use crate::types::dto::{CreateItemCommand, CreateItemForm};
use crate::types::internal::{ActionOutcome, ItemId};

/// Orchestrates the item workflows behind the list page
///
/// Every action returns an `ActionOutcome` and logs what happened; nothing
/// here decides how the client is answered.
pub struct ItemCoordinator {
    item_store: Arc<ItemStore>,
}

impl ItemCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_store: Arc::clone(&app_data.item_store),
        }
    }

    pub fn from_store(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }

    /// All items for the list page
    pub async fn list_items(&self) -> Result<Vec<item::Model>, InternalError> {
        self.item_store.list_all().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to list items");
        })
    }

    /// Validate a submitted form and create the item it names
    pub async fn submit_item(&self, form: CreateItemForm) -> ActionOutcome<item::Model> {
        match CreateItemCommand::try_from(form) {
            Ok(command) => self.add_item(command).await,
            Err(error) => {
                tracing::warn!(error = %error, "Rejected item submission");
                ActionOutcome::Rejected(error)
            }
        }
    }

    pub async fn add_item(&self, command: CreateItemCommand) -> ActionOutcome<item::Model> {
        let outcome = ActionOutcome::from_result(self.item_store.insert(command.name).await);

        match &outcome {
            ActionOutcome::Completed(created) => {
                tracing::info!(id = %created.id, name = %created.name, "New item added");
            }
            ActionOutcome::Rejected(error) => {
                tracing::warn!(error = %error, "Rejected item submission");
            }
            ActionOutcome::Unavailable(error) => {
                tracing::error!(error = %error, "Failed to add item");
            }
            ActionOutcome::NotFound => {}
        }

        outcome
    }

    /// Delete the item identified by the raw path segment `raw_id`
    ///
    /// A malformed id cannot name a stored item, so it is `NotFound` like an
    /// unknown one.
    pub async fn remove_item(&self, raw_id: &str) -> ActionOutcome<item::Model> {
        tracing::debug!(id = raw_id, "Delete requested");

        let id = match raw_id.parse::<ItemId>() {
            Ok(id) => id,
            Err(error) => {
                tracing::warn!(error = %error, "Item to delete has a malformed id");
                return ActionOutcome::NotFound;
            }
        };

        let outcome = ActionOutcome::from_optional(self.item_store.delete_by_id(&id).await);

        match &outcome {
            ActionOutcome::Completed(deleted) => {
                tracing::info!(id = %deleted.id, name = %deleted.name, "Item deleted");
            }
            ActionOutcome::NotFound => {
                tracing::info!(id = %id, "Item to delete was not found");
            }
            ActionOutcome::Unavailable(error) => {
                tracing::error!(id = %id, error = %error, "Failed to delete item");
            }
            ActionOutcome::Rejected(_) => {}
        }

        outcome
    }

    pub async fn item_count(&self) -> Result<u64, InternalError> {
        self.item_store.count().await
    }
}
