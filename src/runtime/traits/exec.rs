// ABOUTME: Exec trait for container runtimes.
// ABOUTME: Run a command inside a running container and capture its output.

use super::sealed::Sealed;
use crate::runtime::RuntimeError;
use crate::types::ContainerRef;
use async_trait::async_trait;

#[async_trait]
pub trait ExecOps: Sealed + Send + Sync {
    /// Run `cmd` in `container`, returning its stdout.
    ///
    /// Stdout and stderr are captured separately; on failure the captured
    /// stderr is carried in [`RuntimeError::ExecFailed`].
    async fn exec(&self, container: &ContainerRef, cmd: &[String])
    -> Result<Vec<u8>, RuntimeError>;
}
