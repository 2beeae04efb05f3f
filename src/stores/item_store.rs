use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};
use crate::config::DatabaseContext;
use crate::errors::InternalError;
use crate::types::db::item::{self, ActiveModel, Column, Entity as Item};
use crate::types::internal::{ItemId, ItemName};

/// ItemStore owns persistence of to-do items
///
/// No transactions or locks: concurrent writers race at the database and the
/// last write wins.
pub struct ItemStore {
    db: DatabaseContext,
}

impl ItemStore {
    pub fn new(db: DatabaseContext) -> Self {
        Self { db }
    }

    /// Validate `name` and persist a new item
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored item with its assigned id and timestamps
    /// * `Err(InternalError::Item)` - Name absent or too short; nothing is written
    /// * `Err(InternalError::Database)` - Database error
    pub async fn create(&self, name: Option<&str>) -> Result<item::Model, InternalError> {
        let name = ItemName::parse(name)?;
        self.insert(name).await
    }

    /// Persist an item whose name has already been validated
    pub async fn insert(&self, name: ItemName) -> Result<item::Model, InternalError> {
        let new_item = ActiveModel {
            id: Set(ItemId::new().to_string()),
            name: Set(name.into_inner()),
            ..Default::default()
        };

        new_item
            .insert(self.db.connection())
            .await
            .map_err(|e| InternalError::database("create_item", e))
    }

    /// Every stored item, oldest first
    ///
    /// An empty store yields an empty vec, not an error.
    pub async fn list_all(&self) -> Result<Vec<item::Model>, InternalError> {
        Item::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(self.db.connection())
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Remove an item by id
    ///
    /// # Returns
    /// * `Ok(Some(Model))` - The removed item
    /// * `Ok(None)` - No item with that id (including one removed concurrently)
    /// * `Err(InternalError::Database)` - Database error or database not connected
    pub async fn delete_by_id(&self, id: &ItemId) -> Result<Option<item::Model>, InternalError> {
        let conn = self.db.connection();
        let key = id.to_string();

        let Some(existing) = Item::find_by_id(key.clone())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_item_for_delete", e))?
        else {
            return Ok(None);
        };

        let result = Item::delete_by_id(key)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(existing))
    }

    /// Number of stored items
    pub async fn count(&self) -> Result<u64, InternalError> {
        Item::find()
            .count(self.db.connection())
            .await
            .map_err(|e| InternalError::database("count_items", e))
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
