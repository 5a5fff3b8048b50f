use std::env;
use std::fmt;

use crate::session::{Settings, Theme};

/// Distinguishes runtime behavior for different stages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub settings: Settings,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let defaults = Settings::default();

        let use_mock_data = match env::var("RESUME_USE_MOCK") {
            Ok(value) => parse_bool(&value).ok_or(ConfigError::InvalidMockFlag { value })?,
            Err(_) => defaults.use_mock_data,
        };

        let api_base_url =
            env::var("RESUME_API_BASE_URL").unwrap_or_else(|_| defaults.api_base_url.clone());

        let api_key = env::var("RESUME_API_KEY").ok().filter(|key| !key.is_empty());

        let theme = match env::var("RESUME_THEME") {
            Ok(value) => parse_theme(&value).ok_or(ConfigError::InvalidTheme { value })?,
            Err(_) => defaults.theme,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            settings: Settings {
                use_mock_data,
                api_base_url,
                api_key,
                theme,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" => Some(Theme::Light),
        "dark" => Some(Theme::Dark),
        _ => None,
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMockFlag { value: String },
    InvalidTheme { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMockFlag { value } => {
                write!(f, "RESUME_USE_MOCK must be a boolean, got '{}'", value)
            }
            ConfigError::InvalidTheme { value } => {
                write!(f, "RESUME_THEME must be 'light' or 'dark', got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
