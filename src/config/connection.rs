// ABOUTME: Connection parameters for a local or remote engine.
// ABOUTME: Remote host plus optional TLS CA, client certificate and client key paths.

use super::error::{ConfigError, TlsFileNotFoundSnafu};
use snafu::ResultExt;
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the three TLS files the engine can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsFile {
    CaCert,
    Cert,
    Key,
}

impl TlsFile {
    /// The engine's global flag for this file.
    pub fn flag(&self) -> &'static str {
        match self {
            TlsFile::CaCert => "--tlscacert",
            TlsFile::Cert => "--tlscert",
            TlsFile::Key => "--tlskey",
        }
    }
}

impl fmt::Display for TlsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TlsFile::CaCert => write!(f, "TLS CA certificate"),
            TlsFile::Cert => write!(f, "TLS certificate"),
            TlsFile::Key => write!(f, "TLS key"),
        }
    }
}

/// How to address the engine.
///
/// An unset host means the engine's own default (usually the local daemon).
/// Empty strings and empty paths are treated as unset everywhere, so a
/// config written as `host: ""` behaves like no host at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    pub tls_ca_cert: Option<PathBuf>,
    pub tls_cert: Option<PathBuf>,
    pub tls_key: Option<PathBuf>,
}

impl ConnectionConfig {
    /// Connection to the local engine with no TLS.
    pub fn local() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into()).filter(|h| !h.is_empty());
        self
    }

    pub fn tls_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls_ca_cert = non_empty(path.into());
        self
    }

    pub fn tls_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls_cert = non_empty(path.into());
        self
    }

    pub fn tls_key(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls_key = non_empty(path.into());
        self
    }

    /// The remote endpoint, if one is configured.
    pub fn remote_host(&self) -> Option<&str> {
        self.host.as_deref().filter(|h| !h.is_empty())
    }

    /// Configured TLS files in flag order: CA cert, client cert, client key.
    pub fn tls_files(&self) -> impl Iterator<Item = (TlsFile, &Path)> {
        [
            (TlsFile::CaCert, self.tls_ca_cert.as_deref()),
            (TlsFile::Cert, self.tls_cert.as_deref()),
            (TlsFile::Key, self.tls_key.as_deref()),
        ]
        .into_iter()
        .filter_map(|(which, path)| path.filter(|p| !p.as_os_str().is_empty()).map(|p| (which, p)))
    }

    /// Whether any TLS file is configured, which turns on `--tlsverify`.
    pub fn uses_tls(&self) -> bool {
        self.tls_files().next().is_some()
    }

    /// Check that every configured TLS file exists.
    ///
    /// Files are checked in flag order and the first missing one is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (which, path) in self.tls_files() {
            std::fs::metadata(path).context(TlsFileNotFoundSnafu { which, path })?;
        }
        Ok(())
    }
}

fn non_empty(path: PathBuf) -> Option<PathBuf> {
    Some(path).filter(|p| !p.as_os_str().is_empty())
}
