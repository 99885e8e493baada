// ABOUTME: Locates the engine executable once, at runtime-handle construction.
// ABOUTME: Searches PATH by name or checks an explicit path for executability.

use crate::config::{ConfigError, EngineNotFoundSnafu};
use snafu::ResultExt;
use std::path::{Path, PathBuf};

/// Name looked up on `PATH` when no explicit engine path is configured.
pub const DEFAULT_ENGINE: &str = "docker";

/// Resolved path to the engine executable.
///
/// Resolution happens exactly once; the path is immutable afterwards and
/// every invocation made through a runtime handle uses it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineBinary {
    path: PathBuf,
}

impl EngineBinary {
    /// Find `name` on `PATH`.
    pub fn discover(name: &str) -> Result<Self, ConfigError> {
        let path = which::which(name).context(EngineNotFoundSnafu { name })?;
        tracing::debug!("Resolved engine `{}` to {}", name, path.display());
        Ok(Self { path })
    }

    /// Use an explicit path, which must point at an executable file.
    pub fn at(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let resolved = which::which(path).context(EngineNotFoundSnafu {
            name: path.display().to_string(),
        })?;
        Ok(Self { path: resolved })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
