// ABOUTME: Configuration error types with SNAFU context selectors.
// ABOUTME: Covers engine discovery, TLS file validation, and config file loading.

use super::connection::TlsFile;
use snafu::Snafu;
use std::path::PathBuf;

/// Errors raised before any engine command is issued.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConfigError {
    #[snafu(display("container engine `{name}` not found: {source}"))]
    EngineNotFound { name: String, source: which::Error },

    #[snafu(display("{which} not found at '{}': {source}", path.display()))]
    TlsFileNotFound {
        which: TlsFile,
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to read config file {}: {source}", path.display()))]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to parse config: {source}"))]
    ParseConfig { source: serde_yaml::Error },

    #[snafu(display("missing required environment variable: {var}"))]
    MissingEnvVar { var: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    EngineNotFound,
    TlsFileNotFound,
    ConfigFile,
    MissingEnvVar,
}

impl ConfigError {
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ConfigError::EngineNotFound { .. } => ConfigErrorKind::EngineNotFound,
            ConfigError::TlsFileNotFound { .. } => ConfigErrorKind::TlsFileNotFound,
            ConfigError::ReadConfig { .. } | ConfigError::ParseConfig { .. } => {
                ConfigErrorKind::ConfigFile
            }
            ConfigError::MissingEnvVar { .. } => ConfigErrorKind::MissingEnvVar,
        }
    }
}
