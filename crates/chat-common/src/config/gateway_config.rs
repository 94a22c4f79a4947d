//! Gateway client configuration
//!
//! Loaded from `CHAT_GATEWAY_*` environment variables, with an optional
//! `.env` file for development.

use chat_core::ChannelOverrideSchema;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::Level;

const ENV_PREFIX: &str = "CHAT_GATEWAY";

/// Gateway client configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayClientConfig {
    #[serde(default)]
    pub environment: Environment,
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
    /// Channel override schema version to subscribe to; unset drops those frames
    #[serde(default)]
    pub channel_override_schema: Option<ChannelOverrideSchema>,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GatewayClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            log_json: false,
            channel_override_schema: None,
        }
    }
}

impl GatewayClientConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    /// Returns an error if a variable holds a value of the wrong shape
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::load(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load configuration from an explicit variable map instead of the
    /// process environment
    ///
    /// # Errors
    /// Returns an error if a variable holds a value of the wrong shape
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self::load(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(vars)),
        )
    }

    fn load(source: config::Environment) -> Result<Self, ConfigError> {
        let loaded: Self = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidValue("log_level", self.log_level.clone()))?;
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
