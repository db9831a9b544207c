//! Service configuration.
//!
//! Loaded from (in order of precedence, highest first):
//! 1. Command-line flags
//! 2. Environment variables (`ROSTER_*`, e.g. `ROSTER_PORT=9000`)
//! 3. A TOML file (`roster.toml` in the working directory, or `--config`)
//! 4. Default values

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "ROSTER_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json_logs: bool,

    /// Start with the five demo students instead of an empty store.
    #[serde(default = "default_seed_students")]
    pub seed_students: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_seed_students() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            json_logs: false,
            seed_students: default_seed_students(),
        }
    }
}

impl Config {
    /// Defaults, then `file` (or [`DEFAULT_CONFIG_FILE`]), then the environment.
    /// A missing file is skipped.
    pub fn figment(file: Option<&Path>) -> Figment {
        let file = file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extracts a config from `figment`.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    /// Loads from the file and the environment, without CLI overrides.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::from_figment(&Self::figment(file))
    }

    /// `host:port`, ready for [`Server::bind`](crate::Server::bind).
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
