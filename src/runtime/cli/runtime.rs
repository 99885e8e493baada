// ABOUTME: CliRuntime struct and its capability trait implementations.
// ABOUTME: Each operation builds its argument vector, invokes the engine, and maps the result.

use crate::config::{ConfigError, ConnectionConfig, WaitSettings};
use crate::runtime::args::build_args;
use crate::runtime::copy::{local_source, temp_destination};
use crate::runtime::detection::{DEFAULT_ENGINE, EngineBinary};
use crate::runtime::error::{RuntimeError, WaitTimeout};
use crate::runtime::invocation::Invocation;
use crate::runtime::run::{HostOs, RunSpec};
use crate::runtime::traits::sealed::Sealed;
use crate::runtime::traits::{ContainerOps, CopyOps, ExecOps, InspectOps, LogOps, RunOps};
use crate::runtime::wait::{WaitState, poll_until};
use crate::types::ContainerRef;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Format expression asking `inspect` for the running flag as plain text.
pub const RUNNING_FORMAT: &str = "{{.State.Running}}";

/// Runtime handle driving the engine through its command-line interface.
///
/// Holds only immutable configuration, so it can be cloned freely and shared
/// across tasks. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct CliRuntime {
    connection: ConnectionConfig,
    binary: EngineBinary,
    wait: WaitSettings,
}

impl Sealed for CliRuntime {}

impl CliRuntime {
    /// Validate `connection` and pair it with an already-resolved engine.
    pub fn new(connection: ConnectionConfig, binary: EngineBinary) -> Result<Self, ConfigError> {
        connection.validate()?;
        Ok(Self {
            connection,
            binary,
            wait: WaitSettings::default(),
        })
    }

    /// Validate `connection` and find `docker` on `PATH`.
    pub fn connect(connection: ConnectionConfig) -> Result<Self, ConfigError> {
        let binary = EngineBinary::discover(DEFAULT_ENGINE)?;
        Self::new(connection, binary)
    }

    pub fn with_wait_settings(mut self, wait: WaitSettings) -> Self {
        self.wait = wait;
        self
    }

    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    pub fn binary(&self) -> &EngineBinary {
        &self.binary
    }

    pub fn wait_settings(&self) -> WaitSettings {
        self.wait
    }

    /// Assemble the full invocation for an operation.
    pub fn invocation<I, S>(&self, operation: I) -> Invocation<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(self.binary.path(), build_args(&self.connection, operation))
    }
}

#[async_trait]
impl ContainerOps for CliRuntime {
    async fn start(
        &self,
        container: &ContainerRef,
        compose_file: &Path,
        wait: bool,
    ) -> Result<(), RuntimeError> {
        let compose_file = compose_file.to_string_lossy().into_owned();
        self.invocation(["compose", "-f", compose_file.as_str(), "up", "-d"])
            .run_inherited()
            .await
            .map_err(|source| RuntimeError::StartFailed {
                container: container.clone(),
                source,
            })?;

        if wait {
            tracing::info!("Waiting for {} to report running", container);
            self.wait_until_running(container, self.wait.timeout)
                .await
                .map_err(|e| match e {
                    RuntimeError::WaitTimeout(source) => RuntimeError::ContainerNotReady {
                        container: container.clone(),
                        source,
                    },
                    other => other,
                })?;
        }

        Ok(())
    }

    async fn stop(&self, container: &ContainerRef) -> Result<(), RuntimeError> {
        self.invocation(["stop", container.as_str()])
            .run_inherited()
            .await
            .map_err(|source| RuntimeError::StopFailed {
                container: container.clone(),
                source,
            })
    }

    async fn remove(&self, container: &ContainerRef) -> Result<(), RuntimeError> {
        self.stop(container).await?;

        self.invocation(["rm", container.as_str()])
            .run_inherited()
            .await
            .map_err(|source| RuntimeError::RemoveFailed {
                container: container.clone(),
                source,
            })
    }
}

#[async_trait]
impl CopyOps for CliRuntime {
    async fn copy_to_container(
        &self,
        source: &Path,
        container: &ContainerRef,
        destination: &str,
    ) -> Result<(), RuntimeError> {
        let temp_path = temp_destination(destination);
        let local = local_source(source);
        let target = format!("{}:{}", container, temp_path);

        self.invocation(["cp", "-L", "-q", local.as_str(), target.as_str()])
            .run_inherited()
            .await
            .map_err(|e| RuntimeError::CopyFailed {
                local: source.to_path_buf(),
                container: container.clone(),
                temp_path: temp_path.clone(),
                source: e,
            })?;

        self.invocation(["exec", container.as_str(), "mv", temp_path.as_str(), destination])
            .run_inherited()
            .await
            .map_err(|e| {
                tracing::warn!(
                    "Rename failed; {} left behind in {}",
                    temp_path,
                    container
                );
                RuntimeError::MoveFailed {
                    container: container.clone(),
                    temp_path: temp_path.clone(),
                    destination: destination.to_string(),
                    source: e,
                }
            })
    }
}

#[async_trait]
impl InspectOps for CliRuntime {
    async fn is_running(&self, container: &ContainerRef) -> bool {
        let invocation = self.invocation(["inspect", "-f", RUNNING_FORMAT, container.as_str()]);

        match invocation.capture().await {
            Ok(output) if output.status.success() => {
                String::from_utf8_lossy(&output.stdout).trim() == "true"
            }
            Ok(output) => {
                tracing::debug!(
                    "inspect {} exited with {}; treating as not running",
                    container,
                    output.status
                );
                false
            }
            Err(e) => {
                tracing::warn!("{}; treating {} as not running", e, container);
                false
            }
        }
    }

    async fn wait_until_running(
        &self,
        container: &ContainerRef,
        timeout: Duration,
    ) -> Result<(), RuntimeError> {
        let state = poll_until(timeout, self.wait.interval, || self.is_running(container)).await;

        match state {
            WaitState::Succeeded => {
                tracing::info!("Container {} is running", container);
                Ok(())
            }
            WaitState::TimedOut | WaitState::Polling => {
                tracing::warn!("Gave up waiting for {} after {:?}", container, timeout);
                Err(WaitTimeout {
                    container: container.clone(),
                    timeout,
                }
                .into())
            }
        }
    }
}

#[async_trait]
impl ExecOps for CliRuntime {
    async fn exec(
        &self,
        container: &ContainerRef,
        cmd: &[String],
    ) -> Result<Vec<u8>, RuntimeError> {
        let operation = ["exec".to_string(), container.to_string()]
            .into_iter()
            .chain(cmd.iter().cloned());
        let invocation = self.invocation(operation);

        let output = invocation
            .capture()
            .await
            .map_err(|source| RuntimeError::ExecFailed {
                container: container.clone(),
                stderr: String::new(),
                source,
            })?;

        if !output.status.success() {
            return Err(RuntimeError::ExecFailed {
                container: container.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                source: invocation.exit_error(output.status),
            });
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl LogOps for CliRuntime {
    async fn stream_logs(&self, container: &ContainerRef) -> Result<(), RuntimeError> {
        self.invocation(["logs", "-f", container.as_str()])
            .run_inherited()
            .await
            .map_err(|source| RuntimeError::LogsFailed {
                container: container.clone(),
                source,
            })
    }
}

#[async_trait]
impl RunOps for CliRuntime {
    async fn run_ephemeral(&self, spec: &RunSpec) -> Result<(), RuntimeError> {
        let invocation = self.invocation(spec.operation_args(HostOs::current()));

        if spec.debug {
            println!("Engine command: {}", invocation.command_line());
        }

        invocation
            .run_inherited()
            .await
            .map_err(|source| RuntimeError::RunFailed {
                image: spec.image.clone(),
                source,
            })
    }
}
