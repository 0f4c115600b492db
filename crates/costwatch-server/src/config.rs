//! Configuration for costwatch-server.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Mock data source configuration
    #[serde(default)]
    pub mock: MockConfig,
}

impl ServerConfig {
    /// Load configuration: defaults, overlaid with an optional file, overlaid
    /// with `COSTWATCH_*` environment variables (`__` as section separator).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&ServerConfig::default())?;
        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder
            .add_source(config::Environment::with_prefix("COSTWATCH").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Listen address
    pub listen_addr: SocketAddr,

    /// Enable permissive CORS (local development)
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            enable_cors: true,
        }
    }
}

/// Mock data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Window length served when the caller does not ask for one
    #[serde(default = "default_days")]
    pub days: u32,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    "127.0.0.1:8080".parse().expect("static default address")
}

fn default_true() -> bool {
    true
}

fn default_days() -> u32 {
    30
}
