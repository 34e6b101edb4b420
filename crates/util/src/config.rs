use std::{env, fmt, path::PathBuf};

/// Application runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }

    /// Returns `true` when the current environment should behave as development.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Returns the canonical name used for logging labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// Where the deployment-supplied notifications override document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideSource {
    Inline(String),
    File(PathBuf),
}

impl OverrideSource {
    /// Human readable origin used in logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Inline(_) => "APP_NOTIFICATIONS_JSON".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub notifications: Option<OverrideSource>,
}

impl AppConfig {
    /// Constructs the configuration by reading and validating environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_value = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let environment = Environment::from_str(&env_value)?;

        // Inline JSON takes precedence over a file path.
        let notifications = match env::var("APP_NOTIFICATIONS_JSON") {
            Ok(document) => Some(OverrideSource::Inline(document)),
            Err(_) => env::var_os("APP_NOTIFICATIONS_FILE")
                .map(|path| OverrideSource::File(PathBuf::from(path))),
        };

        Ok(Self {
            environment,
            notifications,
        })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    InvalidEnvironment(String),
    ReadOverrides {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseOverrides(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnvironment(value) => write!(
                f,
                "APP_ENV must be one of 'development', 'production', or 'test' (got {value})"
            ),
            Self::ReadOverrides { path, source } => write!(
                f,
                "failed to read notifications overrides from {}: {source}",
                path.display()
            ),
            Self::ParseOverrides(err) => {
                write!(f, "notifications overrides are not valid JSON: {err}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEnvironment(_) => None,
            Self::ReadOverrides { source, .. } => Some(source),
            Self::ParseOverrides(err) => Some(err),
        }
    }
}
