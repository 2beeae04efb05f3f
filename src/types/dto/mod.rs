// DTOs - shapes exchanged with HTTP clients
pub mod common;
pub mod items;

pub use common::HealthResponse;
pub use items::{CreateItemCommand, CreateItemForm};
