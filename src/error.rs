// ABOUTME: Application-wide error type for the stevedore binary.
// ABOUTME: Uses thiserror to unify configuration, runtime and I/O failures.

use crate::config::ConfigError;
use crate::runtime::RuntimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
