// ABOUTME: Configuration types and parsing for stevedore.yml.
// ABOUTME: Resolves connection parameters, engine path, and wait timing.

mod connection;
mod env_value;
mod error;
mod wait;

pub use connection::{ConnectionConfig, TlsFile};
pub use env_value::{EnvValue, resolve_optional};
pub use error::*;
pub use wait::WaitSettings;

use crate::runtime::{CliRuntime, DEFAULT_ENGINE, EngineBinary};
use serde::Deserialize;
use snafu::ResultExt;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stevedore.yml";
pub const CONFIG_FILENAME_ALT: &str = "stevedore.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".stevedore/config.yml";

/// Contents of a `stevedore.yml` file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Explicit engine binary; looked up on `PATH` when absent.
    #[serde(default)]
    pub engine: Option<PathBuf>,

    #[serde(default)]
    pub host: Option<EnvValue>,

    #[serde(default)]
    pub tls: TlsConfig,

    #[serde(default)]
    pub wait: WaitSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub ca_cert: Option<EnvValue>,
    #[serde(default)]
    pub cert: Option<EnvValue>,
    #[serde(default)]
    pub key: Option<EnvValue>,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context(ParseConfigSnafu)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).context(ReadConfigSnafu { path })?;
        Self::from_yaml(&content)
    }

    /// Load the first config file found in `dir`, or defaults if there is none.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("Loading config from {}", path.display());
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }

    /// Resolve environment references into a concrete connection config.
    pub fn connection(&self) -> Result<ConnectionConfig, ConfigError> {
        let mut connection = ConnectionConfig::local();
        if let Some(host) = resolve_optional(self.host.as_ref())? {
            connection = connection.host(host);
        }
        if let Some(path) = resolve_optional(self.tls.ca_cert.as_ref())? {
            connection = connection.tls_ca_cert(path);
        }
        if let Some(path) = resolve_optional(self.tls.cert.as_ref())? {
            connection = connection.tls_cert(path);
        }
        if let Some(path) = resolve_optional(self.tls.key.as_ref())? {
            connection = connection.tls_key(path);
        }
        Ok(connection)
    }

    /// Resolve the engine binary: the configured path, or `docker` on `PATH`.
    pub fn engine_binary(&self) -> Result<EngineBinary, ConfigError> {
        match &self.engine {
            Some(path) => EngineBinary::at(path),
            None => EngineBinary::discover(DEFAULT_ENGINE),
        }
    }

    /// Build a validated runtime handle from this configuration.
    pub fn runtime(&self) -> Result<CliRuntime, ConfigError> {
        let connection = self.connection()?;
        let binary = self.engine_binary()?;
        Ok(CliRuntime::new(connection, binary)?.with_wait_settings(self.wait))
    }
}
