//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `CLAIMWISE_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::index::DEFAULT_TOP_K;

/// Default embedding model identifier, passed opaquely to the embedding
/// collaborator.
pub const DEFAULT_EMBEDDING_MODEL: &str = "paraphrase-minilm-l3-v2";

/// Service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `CLAIMWISE_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the three table sources. Default: `./datasets`.
    pub data_dir: PathBuf,

    /// Opaque embedding model identifier handed to the collaborator.
    pub embedding_model: String,

    /// Base URL of a remote embedding service. When unset, the
    /// deterministic hashed backend is used instead.
    pub embedding_url: Option<String>,

    /// Retrieval width for the vector index. Default: `3`.
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            data_dir: PathBuf::from("./datasets"),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_url: None,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "CLAIMWISE_PORT";
    const ENV_BIND_ADDR: &'static str = "CLAIMWISE_BIND_ADDR";
    const ENV_DATA_DIR: &'static str = "CLAIMWISE_DATA_DIR";
    const ENV_EMBEDDING_MODEL: &'static str = "CLAIMWISE_EMBEDDING_MODEL";
    const ENV_EMBEDDING_URL: &'static str = "CLAIMWISE_EMBEDDING_URL";
    const ENV_TOP_K: &'static str = "CLAIMWISE_TOP_K";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let data_dir = Self::parse_path_from_env(Self::ENV_DATA_DIR, defaults.data_dir);
        let embedding_model =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_MODEL, defaults.embedding_model);
        let embedding_url = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_URL);
        let top_k = Self::parse_top_k_from_env(defaults.top_k)?;

        Ok(Self {
            port,
            bind_addr,
            data_dir,
            embedding_model,
            embedding_url,
            top_k,
        })
    }

    /// Validates basic invariants (does not create directories or require
    /// the data directory to exist — missing tables degrade at load time).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.data_dir.clone(),
            });
        }

        if self.top_k == 0 {
            return Err(ConfigError::InvalidTopK);
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
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

    fn parse_top_k_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_TOP_K) {
            Ok(value) => {
                let top_k: usize = value.parse().map_err(|e| ConfigError::TopKParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if top_k == 0 {
                    return Err(ConfigError::InvalidTopK);
                }

                Ok(top_k)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
