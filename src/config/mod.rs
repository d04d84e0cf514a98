//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `BIZMATCH_*` environment variables.

pub mod engine;
pub mod error;


pub use engine::{AccessibilityConfig, EngineConfig, TierThresholds};
pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::DEFAULT_TOP_K;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `BIZMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path to the business catalog CSV. Default: `data/businesses.csv`.
    pub catalog_path: PathBuf,

    /// Number of ranked results returned by a search. Default: `5`.
    pub top_k: usize,
}

/// Default catalog location used when `BIZMATCH_CATALOG_PATH` is not set.
pub const DEFAULT_CATALOG_PATH: &str = "data/businesses.csv";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "BIZMATCH_PORT";
    const ENV_BIND_ADDR: &'static str = "BIZMATCH_BIND_ADDR";
    const ENV_CATALOG_PATH: &'static str = "BIZMATCH_CATALOG_PATH";
    const ENV_TOP_K: &'static str = "BIZMATCH_TOP_K";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let catalog_path = Self::parse_path_from_env(Self::ENV_CATALOG_PATH, defaults.catalog_path);
        let top_k = Self::parse_nonzero_usize_from_env(Self::ENV_TOP_K, defaults.top_k);

        Ok(Self {
            port,
            bind_addr,
            catalog_path,
            top_k,
        })
    }

    /// Validates paths (a missing catalog is allowed; a non-file catalog path is not).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_path.exists() && !self.catalog_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.catalog_path.clone(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Builds the engine configuration injected into the ranking/evaluation engines.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            top_k: self.top_k,
            ..EngineConfig::default()
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_nonzero_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(default)
    }
}
