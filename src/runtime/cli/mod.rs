// ABOUTME: Engine backend that shells out to the docker CLI.
// ABOUTME: Implements all capability traits on top of subprocess invocations.

mod runtime;

pub use runtime::{CliRuntime, RUNNING_FORMAT};
