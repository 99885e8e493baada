// ABOUTME: Composable capability traits for container engines.
// ABOUTME: ContainerOps, CopyOps, InspectOps, ExecOps, LogOps, RunOps, combined as ContainerRuntime.

mod container;
mod copy;
mod exec;
mod inspect;
mod logs;
mod run;
pub(crate) mod sealed;

pub use container::ContainerOps;
pub use copy::CopyOps;
pub use exec::ExecOps;
pub use inspect::InspectOps;
pub use logs::LogOps;
pub use run::RunOps;

/// Every capability an engine backend provides.
pub trait ContainerRuntime: ContainerOps + CopyOps + InspectOps + ExecOps + LogOps + RunOps {}

impl<T> ContainerRuntime for T where T: ContainerOps + CopyOps + InspectOps + ExecOps + LogOps + RunOps
{}
