//! Application configuration management.

use serde::Deserialize;

use crate::types::Position;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Money formatting defaults.
    #[serde(default)]
    pub money: MoneyConfig,
    /// Random string generation limits.
    #[serde(default)]
    pub random: RandomConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Defaults applied when a money format request leaves options out.
#[derive(Debug, Clone, Deserialize)]
pub struct MoneyConfig {
    /// Currency code used when none is given.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Whether to render the symbol instead of the code.
    #[serde(default)]
    pub use_symbol: bool,
    /// Label placement.
    #[serde(default)]
    pub position: Position,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            use_symbol: false,
            position: Position::default(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Random string configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomConfig {
    /// Length used when a request does not ask for one.
    #[serde(default = "default_random_length")]
    pub default_length: usize,
    /// Upper bound on requested lengths.
    #[serde(default = "default_random_max_length")]
    pub max_length: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            default_length: default_random_length(),
            max_length: default_random_max_length(),
        }
    }
}

fn default_random_length() -> usize {
    20
}

fn default_random_max_length() -> usize {
    1024
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("WEBFUNCS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
