//! Server Configuration
//!
//! Command line flags (with environment fallbacks) and catalog loading.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::activity::{default_catalog, Catalog};
use crate::error::ConfigError;
use crate::store::CapacityPolicy;

#[derive(Parser, Debug, Clone)]
#[command(name = "activity-server")]
#[command(about = "Mergington High School activity signup server")]
pub struct ServerConfig {
    /// Server host
    #[arg(long, env = "ACTIVITY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "ACTIVITY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// JSON file replacing the built-in activity catalog
    #[arg(long, env = "ACTIVITY_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Reject signups once an activity reaches max_participants
    /// (env accepts true/false, 1/0, yes/no, on/off)
    #[arg(
        long,
        env = "ENFORCE_CAPACITY",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub enforce_capacity: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        if self.enforce_capacity {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Unchecked
        }
    }

    /// Catalog to seed the store with: the configured file, or the built-in one
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog {
            Some(path) => load_catalog_file(path),
            None => Ok(default_catalog()),
        }
    }
}

/// Read a catalog in the same JSON shape `GET /activities` returns
pub fn load_catalog_file(path: &Path) -> Result<Catalog, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Catalog = serde_json::from_str(&raw)?;

    if let Some((name, _)) = catalog.iter().find(|(_, a)| a.max_participants == 0) {
        return Err(ConfigError::ZeroCapacity(name.clone()));
    }

    Ok(catalog)
}
