// ABOUTME: Engine runtime layer: argument building, invocation, and operations.
// ABOUTME: Exposes the capability traits and the docker CLI backend.

mod args;
mod cli;
mod copy;
mod detection;
mod error;
mod invocation;
mod run;
pub mod traits;
mod wait;

pub use args::{HOST_FLAG, TLS_VERIFY_FLAG, build_args};
pub use cli::{CliRuntime, RUNNING_FORMAT};
pub use copy::{TEMP_SUFFIX, local_source, temp_destination};
pub use detection::{DEFAULT_ENGINE, EngineBinary};
pub use error::{RuntimeError, RuntimeErrorKind, WaitTimeout};
pub use invocation::{Invocation, InvocationError};
pub use run::{HostOs, RunSpec};
pub use traits::{
    ContainerOps, ContainerRuntime, CopyOps, ExecOps, InspectOps, LogOps, RunOps,
};
pub use wait::{WaitState, poll_until};
