// ABOUTME: Container lifecycle trait.
// ABOUTME: Bring a compose project up, stop a container, stop-and-remove a container.

use super::sealed::Sealed;
use crate::runtime::RuntimeError;
use crate::types::ContainerRef;
use async_trait::async_trait;
use std::path::Path;

/// Container lifecycle operations.
#[async_trait]
pub trait ContainerOps: Sealed + Send + Sync {
    /// Bring up the services in `compose_file` detached.
    ///
    /// With `wait`, also block until `container` reports running, using the
    /// runtime's default timeout.
    async fn start(
        &self,
        container: &ContainerRef,
        compose_file: &Path,
        wait: bool,
    ) -> Result<(), RuntimeError>;

    /// Stop a running container.
    async fn stop(&self, container: &ContainerRef) -> Result<(), RuntimeError>;

    /// Stop, then remove, a container. Removal is skipped if stopping fails.
    async fn remove(&self, container: &ContainerRef) -> Result<(), RuntimeError>;
}
