use thiserror::Error;

pub mod database;
pub mod item;

pub use database::DatabaseError;
pub use item::ItemError;

/// Internal error type for store and coordinator operations
///
/// Not exposed to HTTP clients - the api layer maps it through the failure policy.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error("Render error: {template} failed: {message}")]
    Render {
        template: String,
        message: String,
    },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::from_db_err(operation, source))
    }

    pub fn render(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            template: template.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, RuntimeErr};

    #[test]
    fn test_connection_errors_are_classified_as_not_connected() {
        let error = InternalError::database(
            "list_items",
            DbErr::Conn(RuntimeErr::Internal("Disconnected".to_string())),
        );

        assert!(matches!(
            error,
            InternalError::Database(DatabaseError::NotConnected { ref operation, .. }) if operation == "list_items"
        ));
    }

    #[test]
    fn test_query_errors_are_operation_errors() {
        let error = InternalError::database("list_items", DbErr::Custom("boom".to_string()));

        assert!(matches!(
            error,
            InternalError::Database(DatabaseError::Operation { ref operation, .. }) if operation == "list_items"
        ));
        assert!(error.to_string().contains("list_items failed"));
    }

    #[test]
    fn test_item_errors_convert_and_display() {
        let error: InternalError = ItemError::NameTooShort { min_length: 3, actual: 2 }.into();

        assert!(matches!(
            error,
            InternalError::Item(ItemError::NameTooShort { min_length: 3, actual: 2 })
        ));
        assert_eq!(
            error.to_string(),
            "Item name must be at least 3 characters long, got 2"
        );
    }
}
