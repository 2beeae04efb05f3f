use crate::errors::{InternalError, ItemError};

/// Explicit result of one item action
///
/// The api layer decides how each variant becomes an HTTP response.
#[derive(Debug)]
pub enum ActionOutcome<T> {
    /// The action ran and produced a value
    Completed(T),
    /// The input failed validation; nothing was written
    Rejected(ItemError),
    /// The target did not exist; nothing was written
    NotFound,
    /// The store could not be used
    Unavailable(InternalError),
}

impl<T> ActionOutcome<T> {
    pub fn from_result(result: Result<T, InternalError>) -> Self {
        match result {
            Ok(value) => Self::Completed(value),
            Err(InternalError::Item(error)) => Self::Rejected(error),
            Err(error) => Self::Unavailable(error),
        }
    }

    /// Like `from_result`, with `Ok(None)` mapped to `NotFound`
    pub fn from_optional(result: Result<Option<T>, InternalError>) -> Self {
        match result {
            Ok(Some(value)) => Self::Completed(value),
            Ok(None) => Self::NotFound,
            Err(error) => Self::from_result(Err(error)),
        }
    }

    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Completed(_) => "completed",
            Self::Rejected(_) => "rejected",
            Self::NotFound => "not_found",
            Self::Unavailable(_) => "unavailable",
        }
    }
}
