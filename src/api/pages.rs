use askama::Template;
use chrono::{DateTime, Local};
use crate::errors::InternalError;
use crate::types::db::item;

/// Fixed heading of the list page
pub const LIST_HEADING: &str = "To Do List";

/// Shown in place of the list when there are no items
pub const EMPTY_SENTINEL: &str = "No Items Found";

/// What the list page shows under the heading
#[derive(Debug)]
pub enum ItemListing {
    Items(Vec<item::Model>),
    Empty(&'static str),
}

impl From<Vec<item::Model>> for ItemListing {
    fn from(items: Vec<item::Model>) -> Self {
        if items.is_empty() {
            Self::Empty(EMPTY_SENTINEL)
        } else {
            Self::Items(items)
        }
    }
}

/// The list page; exactly these three values reach the template
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: String,
    pub heading: &'static str,
    pub items: ItemListing,
}

impl IndexPage {
    pub fn new(today: DateTime<Local>, items: Vec<item::Model>) -> Self {
        Self {
            title: page_title(today),
            heading: LIST_HEADING,
            items: items.into(),
        }
    }

    pub fn render_html(&self) -> Result<String, InternalError> {
        self.render()
            .map_err(|e| InternalError::render("index.html", e.to_string()))
    }
}

/// Short numeric date, e.g. `10/19/2026`
pub fn page_title(today: DateTime<Local>) -> String {
    today.format("%-m/%-d/%Y").to_string()
}
