use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::quiz::{QuizError, QuizVersion};

/// Distinguishes runtime behavior for different stages of the tool.
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
    pub quiz: QuizConfig,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let default_version = match env::var("QUIZ_DEFAULT_VERSION") {
            Ok(value) => value
                .parse::<QuizVersion>()
                .map_err(|source| ConfigError::InvalidVersion { value, source })?,
            Err(_) => QuizVersion::Demo,
        };

        let question_dir = env::var("QUIZ_QUESTION_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let data_dir = env::var("QUIZ_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".spectrum-quiz"));

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            quiz: QuizConfig {
                default_version,
                question_dir,
            },
            storage: StorageConfig { data_dir },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Which question set to use and where overrides live.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub default_version: QuizVersion,
    pub question_dir: Option<PathBuf>,
}

/// Location of saved results and in-flight progress.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidVersion { value: String, source: QuizError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVersion { value, .. } => write!(
                f,
                "QUIZ_DEFAULT_VERSION must be demo, middle, or comprehensive (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidVersion { source, .. } => Some(source),
        }
    }
}
