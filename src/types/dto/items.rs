use serde::Deserialize;
use crate::errors::ItemError;
use crate::types::internal::ItemName;

/// Raw `application/x-www-form-urlencoded` body of the add-item form
#[derive(Deserialize, Debug, Default)]
pub struct CreateItemForm {
    #[serde(rename = "itemName")]
    pub item_name: Option<String>,
}

/// Validated request to create an item
#[derive(Debug, Clone, PartialEq)]
pub struct CreateItemCommand {
    pub name: ItemName,
}

impl TryFrom<CreateItemForm> for CreateItemCommand {
    type Error = ItemError;

    fn try_from(form: CreateItemForm) -> Result<Self, Self::Error> {
        let name = ItemName::parse(form.item_name.as_deref())?;
        Ok(Self { name })
    }
}
