use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::{EnvironmentProvider, SystemEnvironment};

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Read `LOG_LEVEL` (default `INFO`) and `APP_LOG_FILE` from the provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        let log_level = env_provider
            .get_var("LOG_LEVEL")
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| "INFO".to_string());

        let app_log_file = env_provider
            .get_var("APP_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            app_log_file,
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber from environment variables
pub fn init_logging() -> Result<(), LoggingError> {
    init_logging_with(&LoggingConfig::from_env())
}

/// Install a console layer and, when `app_log_file` is set, a daily-rotated file layer
pub fn init_logging_with(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    let Some(log_file_path) = &config.app_log_file else {
        return subscriber
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()));
    };

    let directory = log_file_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let file_name = log_file_path
        .file_name()
        .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

    let file_layer = fmt::layer()
        .with_writer(tracing_appender::rolling::daily(directory, file_name))
        .with_target(true)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    subscriber
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::InitializationError(e.to_string()))
}
