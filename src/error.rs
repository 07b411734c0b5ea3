//! Error types and handling for the `TourAlytics` application

use thiserror::Error;

/// Main error type for the `TourAlytics` application
#[derive(Error, Debug)]
pub enum TouralyticsError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Dataset loading errors (missing file, malformed header, bad values)
    #[error("Dataset error: {message}")]
    DatasetLoad { message: String },

    /// Input validation errors (unknown filter values, out-of-range inputs)
    #[error("Invalid criteria: {message}")]
    InvalidCriteria { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TouralyticsError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new dataset loading error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        Self::DatasetLoad {
            message: message.into(),
        }
    }

    /// Create a new criteria validation error
    pub fn invalid_criteria<S: Into<String>>(message: S) -> Self {
        Self::InvalidCriteria {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TouralyticsError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TouralyticsError::DatasetLoad { message } => {
                format!("Error loading dataset: {message}")
            }
            TouralyticsError::InvalidCriteria { message } => {
                format!("Invalid criteria: {message}")
            }
            TouralyticsError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TouralyticsError::General { message } => message.clone(),
        }
    }
}
