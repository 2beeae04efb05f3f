use thiserror::Error;

/// Validation failures for to-do items
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item name is required")]
    NameRequired,

    #[error("Item name must be at least {min_length} characters long, got {actual}")]
    NameTooShort { min_length: usize, actual: usize },

    #[error("Invalid item id: {value}")]
    InvalidId { value: String },
}
