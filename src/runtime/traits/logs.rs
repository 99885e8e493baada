// ABOUTME: Log streaming trait for container runtimes.
// ABOUTME: Follows a container's logs straight to this process's stdout/stderr.

use super::sealed::Sealed;
use crate::runtime::RuntimeError;
use crate::types::ContainerRef;
use async_trait::async_trait;

#[async_trait]
pub trait LogOps: Sealed + Send + Sync {
    /// Follow logs until the engine process exits.
    async fn stream_logs(&self, container: &ContainerRef) -> Result<(), RuntimeError>;
}
