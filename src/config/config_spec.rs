use std::net::Ipv4Addr;
use std::sync::Arc;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub env_override: Option<String>,
    pub default_value: Option<String>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            required: false,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load a setting value
    ///
    /// The environment variable wins when present; otherwise the default is
    /// used. A required setting with neither fails with `InvalidSetting`.
    pub fn load(&self) -> Result<String, ApplicationError> {
        let setting_name = self.setting_name();

        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, env_var)?;
                return Ok(value);
            }
        }

        if let Some(default) = &self.default_value {
            self.validate_value(default, setting_name)?;
            return Ok(default.clone());
        }

        if self.required {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Required setting has no value from any source".to_string(),
            });
        }

        Ok(String::new())
    }

    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("Value must be at least {} characters long", min_len),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    fn setting_name(&self) -> &str {
        self.env_override.as_deref().unwrap_or("unknown_setting")
    }
}

/// Type parsing utilities for configuration values
impl ConfigSpec {
    /// Parse a port number from string with validation
    ///
    /// # Returns
    /// * `Ok(u16)` - Parsed port number
    /// * `Err(ApplicationError)` - Parse error or validation error
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected port number (1-65535), got '{}': {}", value, e),
            })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    /// Validate a port number is within the specified range
    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value.trim().parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    /// Validate a bind host: an IPv4 address, an IPv6 address or a hostname
    ///
    /// Dotted numeric values must be a valid IPv4 address. Does not perform DNS
    /// resolution.
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value.chars().any(char::is_whitespace) {
            return Err("Host address cannot contain whitespace characters".to_string());
        }

        if value.chars().all(|c| c.is_ascii_digit() || c == '.') {
            value
                .parse::<Ipv4Addr>()
                .map_err(|_| format!("Invalid IPv4 address: '{}'", value))?;
        }

        Ok(())
    }
}
