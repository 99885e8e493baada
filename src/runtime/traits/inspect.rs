// ABOUTME: Inspection trait for container runtimes.
// ABOUTME: Running-state checks and bounded waiting for a container to run.

use super::sealed::Sealed;
use crate::runtime::RuntimeError;
use crate::types::ContainerRef;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait InspectOps: Sealed + Send + Sync {
    /// Whether the engine reports `container` as running.
    ///
    /// Never fails: if the engine cannot be asked, or does not know the
    /// container, the answer is `false`.
    async fn is_running(&self, container: &ContainerRef) -> bool;

    /// Poll until `container` runs or `timeout` elapses.
    async fn wait_until_running(
        &self,
        container: &ContainerRef,
        timeout: Duration,
    ) -> Result<(), RuntimeError>;
}
