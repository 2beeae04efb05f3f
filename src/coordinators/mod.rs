// Coordinators layer - Workflow orchestration
//
// Coordinators compose store operations for specific endpoints and report
// the result as an ActionOutcome.
pub mod item_coordinator;

pub use item_coordinator::ItemCoordinator;
