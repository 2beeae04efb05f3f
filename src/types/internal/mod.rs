// Internal types - never serialized to clients
pub mod action_outcome;
pub mod failure_policy;
pub mod item_id;
pub mod item_name;

pub use action_outcome::ActionOutcome;
pub use failure_policy::FailurePolicy;
pub use item_id::ItemId;
pub use item_name::ItemName;
