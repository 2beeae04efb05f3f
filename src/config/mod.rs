mod bootstrap_settings;
mod config_spec;
mod env_provider;
mod errors;
pub mod database;
pub mod logging;

pub use bootstrap_settings::BootstrapSettings;
pub use config_spec::ConfigSpec;
pub use database::DatabaseContext;
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
