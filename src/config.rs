//! Configuration management for the `TourAlytics` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TouralyticsError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TourAlytics` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouralyticsConfig {
    /// Dataset source configuration
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Dataset source configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the cleaned tourism experience CSV file
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default number of recommendations to return
    #[serde(default = "default_top_n")]
    pub top_n: u32,
    /// Maximum number of recommendations a request may ask for
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: u32,
}

// Default value functions
fn default_dataset_path() -> String {
    "data/cleaned_tourism_experience_data.csv".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_top_n() -> u32 {
    5
}

fn default_max_recommendations() -> u32 {
    10
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            max_recommendations: default_max_recommendations(),
        }
    }
}

impl Default for TouralyticsConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl TouralyticsConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TOURALYTICS_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TOURALYTICS")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TouralyticsConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("touralytics").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.dataset.path.is_empty() {
            return Err(TouralyticsError::config("Dataset path cannot be empty").into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TouralyticsError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TouralyticsError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.defaults.top_n == 0 {
            return Err(TouralyticsError::config(
                "Default recommendation count must be at least 1",
            )
            .into());
        }

        if self.defaults.max_recommendations < self.defaults.top_n {
            return Err(TouralyticsError::config(
                "Maximum recommendation count cannot be below the default count",
            )
            .into());
        }

        if self.defaults.max_recommendations > 100 {
            return Err(
                TouralyticsError::config("Maximum recommendation count cannot exceed 100").into(),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TouralyticsConfig::default();
        assert_eq!(
            config.dataset.path,
            "data/cleaned_tourism_experience_data.csv"
        );
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.top_n, 5);
        assert_eq!(config.defaults.max_recommendations, 10);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = TouralyticsConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TouralyticsConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_empty_dataset_path() {
        let mut config = TouralyticsConfig::default();
        config.dataset.path = String::new();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Dataset path"));
    }

    #[test]
    fn test_config_validation_recommendation_bounds() {
        let mut config = TouralyticsConfig::default();
        config.defaults.top_n = 20;
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("cannot be below the default")
        );
    }

    #[test]
    fn test_config_path_generation() {
        let path = TouralyticsConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("touralytics"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
