use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database could not be reached (pool closed, connection refused, ...)
    #[error("Database not connected: {operation} failed: {source}")]
    NotConnected {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Running migrations failed: {source}")]
    Migration {
        #[source]
        source: sea_orm::DbErr,
    },
}

impl DatabaseError {
    /// Classify a driver error raised while performing `operation`
    pub fn from_db_err(operation: &str, source: sea_orm::DbErr) -> Self {
        match source {
            sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => Self::NotConnected {
                operation: operation.to_string(),
                source,
            },
            source => Self::Operation {
                operation: operation.to_string(),
                source,
            },
        }
    }
}
