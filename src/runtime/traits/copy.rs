// ABOUTME: File transfer trait for container runtimes.
// ABOUTME: Copies a local file into a container without exposing partial writes.

use super::sealed::Sealed;
use crate::runtime::RuntimeError;
use crate::types::ContainerRef;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait CopyOps: Sealed + Send + Sync {
    /// Copy `source` to `destination` inside `container`.
    ///
    /// The file is first written to `<destination>.tmp` and then renamed in
    /// place. If the rename fails the temporary file is left in the container.
    async fn copy_to_container(
        &self,
        source: &Path,
        container: &ContainerRef,
        destination: &str,
    ) -> Result<(), RuntimeError>;
}
