// ABOUTME: Runtime error types, one variant per failing operation.
// ABOUTME: Every variant keeps the underlying invocation error for diagnosis.

use super::invocation::InvocationError;
use crate::types::ContainerRef;
use std::path::PathBuf;
use std::time::Duration;

/// The wait protocol gave up before the container reported running.
#[derive(Debug, thiserror::Error)]
#[error("timed out after {timeout:?} waiting for container {container} to run")]
pub struct WaitTimeout {
    pub container: ContainerRef,
    pub timeout: Duration,
}

/// Errors from runtime operations.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("compose up failed for {container}: {source}")]
    StartFailed {
        container: ContainerRef,
        source: InvocationError,
    },

    #[error("container {container} did not come up: {source}")]
    ContainerNotReady {
        container: ContainerRef,
        source: WaitTimeout,
    },

    #[error("failed to stop container {container}: {source}")]
    StopFailed {
        container: ContainerRef,
        source: InvocationError,
    },

    #[error("failed to remove container {container}: {source}")]
    RemoveFailed {
        container: ContainerRef,
        source: InvocationError,
    },

    #[error("failed to copy {} to {container}:{temp_path}: {source}", .local.display())]
    CopyFailed {
        local: PathBuf,
        container: ContainerRef,
        temp_path: String,
        source: InvocationError,
    },

    /// The temporary file stays behind in the container.
    #[error("failed to move {temp_path} to {destination} in {container}: {source}")]
    MoveFailed {
        container: ContainerRef,
        temp_path: String,
        destination: String,
        source: InvocationError,
    },

    #[error("command failed in container {container}: {source}. Stderr: {stderr}")]
    ExecFailed {
        container: ContainerRef,
        stderr: String,
        source: InvocationError,
    },

    #[error("failed to run image {image}: {source}")]
    RunFailed {
        image: String,
        source: InvocationError,
    },

    #[error("failed to stream logs for {container}: {source}")]
    LogsFailed {
        container: ContainerRef,
        source: InvocationError,
    },

    #[error(transparent)]
    WaitTimeout(#[from] WaitTimeout),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    StartFailed,
    ContainerNotReady,
    StopFailed,
    RemoveFailed,
    CopyFailed,
    MoveFailed,
    ExecFailed,
    RunFailed,
    LogsFailed,
    WaitTimeout,
}

impl RuntimeError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RuntimeErrorKind {
        match self {
            RuntimeError::StartFailed { .. } => RuntimeErrorKind::StartFailed,
            RuntimeError::ContainerNotReady { .. } => RuntimeErrorKind::ContainerNotReady,
            RuntimeError::StopFailed { .. } => RuntimeErrorKind::StopFailed,
            RuntimeError::RemoveFailed { .. } => RuntimeErrorKind::RemoveFailed,
            RuntimeError::CopyFailed { .. } => RuntimeErrorKind::CopyFailed,
            RuntimeError::MoveFailed { .. } => RuntimeErrorKind::MoveFailed,
            RuntimeError::ExecFailed { .. } => RuntimeErrorKind::ExecFailed,
            RuntimeError::RunFailed { .. } => RuntimeErrorKind::RunFailed,
            RuntimeError::LogsFailed { .. } => RuntimeErrorKind::LogsFailed,
            RuntimeError::WaitTimeout(_) => RuntimeErrorKind::WaitTimeout,
        }
    }

    /// The engine invocation behind this error, if there is one.
    pub fn invocation(&self) -> Option<&InvocationError> {
        match self {
            RuntimeError::StartFailed { source, .. }
            | RuntimeError::StopFailed { source, .. }
            | RuntimeError::RemoveFailed { source, .. }
            | RuntimeError::CopyFailed { source, .. }
            | RuntimeError::MoveFailed { source, .. }
            | RuntimeError::ExecFailed { source, .. }
            | RuntimeError::RunFailed { source, .. }
            | RuntimeError::LogsFailed { source, .. } => Some(source),
            RuntimeError::ContainerNotReady { .. } | RuntimeError::WaitTimeout(_) => None,
        }
    }

    /// Captured stderr of a failed exec.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            RuntimeError::ExecFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
