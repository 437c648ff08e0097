use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Offers payload error: {0}")]
    PayloadError(#[from] serde_json::Error),

    #[error("Network error while fetching deals for '{store_id}': {message}")]
    NetworkError { store_id: String, message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl WatcherError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            WatcherError::ConfigValidationError { .. } | WatcherError::InvalidConfigValueError { .. }
        )
    }

    /// One-line message for the console, without internal error chains.
    pub fn user_friendly_message(&self) -> String {
        match self {
            WatcherError::IoError(e) => format!("Kunde inte läsa eller skriva fil: {}", e),
            WatcherError::PayloadError(_) => "Erbjudandena kunde inte tolkas".to_string(),
            WatcherError::NetworkError { store_id, .. } => {
                format!("Kunde inte hämta erbjudanden för butik '{}'", store_id)
            }
            WatcherError::ConfigValidationError { field, message } => {
                format!("Fel i konfigurationen ({}): {}", field, message)
            }
            WatcherError::InvalidConfigValueError { field, reason, .. } => {
                format!("Ogiltigt värde för {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WatcherError>;
