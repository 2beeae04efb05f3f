use std::fmt;
use std::str::FromStr;

/// How unsuccessful item actions are answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log server-side and redirect to the list, whatever happened
    #[default]
    Redirect,
    /// Answer rejections with 422 and store failures with 503
    Status,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redirect" => Ok(Self::Redirect),
            "status" => Ok(Self::Status),
            other => Err(format!(
                "Expected 'redirect' or 'status', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redirect => f.write_str("redirect"),
            Self::Status => f.write_str("status"),
        }
    }
}
