//! # Server Configuration
//!
//! Settings come from an optional YAML file named by `EXPENSE_TRACKER_CONFIG`,
//! with individual environment variables taking precedence.
//!
//! ## YAML Format
//!
//! ```yaml
//! bind_address: "127.0.0.1:3000"
//! cors_origin: "http://localhost:8080"
//! static_dir: "../frontend/dist"
//! log_filter: "info"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_VAR: &str = "EXPENSE_TRACKER_CONFIG";
pub const BIND_ADDRESS_VAR: &str = "EXPENSE_TRACKER_BIND";
pub const CORS_ORIGIN_VAR: &str = "EXPENSE_TRACKER_CORS_ORIGIN";
pub const STATIC_DIR_VAR: &str = "EXPENSE_TRACKER_STATIC_DIR";
pub const LOG_FILTER_VAR: &str = "EXPENSE_TRACKER_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind_address: SocketAddr,
    /// Origin of the expense form allowed through CORS
    pub cors_origin: String,
    /// Directory of static form assets served for non-API paths
    pub static_dir: Option<PathBuf>,
    /// Fallback tracing filter when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origin: "http://localhost:8080".to_string(),
            static_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(std::env::vars())?;
        Ok(config)
    }

    /// Read a YAML config file; a missing file yields the defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Apply `EXPENSE_TRACKER_*` overrides from the given variables
    pub fn apply_overrides<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                BIND_ADDRESS_VAR => {
                    self.bind_address = value
                        .parse()
                        .with_context(|| format!("Invalid {}: {}", BIND_ADDRESS_VAR, value))?;
                }
                CORS_ORIGIN_VAR => self.cors_origin = value,
                STATIC_DIR_VAR => {
                    self.static_dir = if value.is_empty() {
                        None
                    } else {
                        Some(PathBuf::from(value))
                    };
                }
                LOG_FILTER_VAR => self.log_filter = value,
                _ => {}
            }
        }
        Ok(())
    }
}
