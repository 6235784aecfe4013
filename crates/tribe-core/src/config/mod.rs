//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod bus;
pub mod events;
pub mod logging;
pub mod seed;

use serde::{Deserialize, Serialize};

use self::bus::BusConfig;
use self::events::EventsConfig;
use self::logging::LoggingConfig;
use self::seed::SeedConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides, e.g. `TRIBE__LOGGING__LEVEL`.
const ENV_PREFIX: &str = "TRIBE";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (default.toml + environment overlay + `TRIBE__*` variables). Every
/// section has defaults, so an empty source yields a usable config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Event creation defaults and review bounds.
    #[serde(default)]
    pub events: EventsConfig,
    /// Seed data settings.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Domain event bus settings.
    #[serde(default)]
    pub bus: BusConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the named environment.
    ///
    /// Merges `config/default`, `config/{env}` and environment variables
    /// prefixed with `TRIBE__`. Missing files are not an error.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(environment_source())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load configuration from an explicit file path plus `TRIBE__` variables.
    ///
    /// Unlike [`AppConfig::load`], the file must exist.
    pub fn load_from(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(true))
            .add_source(environment_source())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse configuration from an in-memory TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn environment_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
