//! Error types for the navigation toggle

use thiserror::Error;

/// Main error type for nav toggle operations
#[derive(Error, Debug)]
pub enum NavToggleError {
    #[error("Toggle control '{selector}' not found in document")]
    ControlNotFound { selector: String },

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No document available - is this running in a browser window?")]
    NoDocument,

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl NavToggleError {
    pub(crate) fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for nav toggle operations
pub type NavResult<T> = Result<T, NavToggleError>;
