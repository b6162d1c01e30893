use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;

/// Server configuration, loaded from a YAML file.
///
/// The file path comes from the `OUTPOST_CONFIG` environment variable
/// (default `outpost.yaml`); a missing file falls back to defaults, and
/// every field has a default so partial files are fine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub listen_addr: String,
    /// Upper bound on concurrently handled connections
    pub max_connections: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Document root for served files
    pub root: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Cap on the accumulated request buffer
    pub max_request_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            max_connections: 256,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("OUTPOST_CONFIG").unwrap_or_else(|_| "outpost.yaml".to_string());

        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(serde_yaml::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}
