use std::fmt;
use crate::errors::ItemError;

/// A validated item name: present and at least `MIN_LENGTH` characters long
///
/// Length is counted in characters, and the value is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    pub const MIN_LENGTH: usize = 3;

    pub fn parse(value: Option<&str>) -> Result<Self, ItemError> {
        let value = match value {
            Some(value) if !value.is_empty() => value,
            _ => return Err(ItemError::NameRequired),
        };

        let actual = value.chars().count();
        if actual < Self::MIN_LENGTH {
            return Err(ItemError::NameTooShort {
                min_length: Self::MIN_LENGTH,
                actual,
            });
        }

        Ok(Self(value.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for ItemName {
    type Error = ItemError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(Some(value))
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
