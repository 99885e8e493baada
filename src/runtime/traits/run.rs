// ABOUTME: One-shot container trait.
// ABOUTME: Runs a shell command in a fresh container that is removed on exit.

use super::sealed::Sealed;
use crate::runtime::{RunSpec, RuntimeError};
use async_trait::async_trait;

#[async_trait]
pub trait RunOps: Sealed + Send + Sync {
    async fn run_ephemeral(&self, spec: &RunSpec) -> Result<(), RuntimeError>;
}
