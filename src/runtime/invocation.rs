// ABOUTME: Runs one engine command as a subprocess.
// ABOUTME: Either inherits the caller's stdout/stderr or captures them separately.

use std::path::Path;
use std::process::{ExitStatus, Output, Stdio};
use tokio::process::Command;

/// Why an engine invocation did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Exit { command: String, status: ExitStatus },
}

impl InvocationError {
    /// Exit code of the engine process, if it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            InvocationError::Exit { status, .. } => status.code(),
            InvocationError::Spawn { .. } => None,
        }
    }
}

/// A fully assembled engine command: binary plus final argument vector.
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    binary: &'a Path,
    args: Vec<String>,
}

impl<'a> Invocation<'a> {
    pub fn new(binary: &'a Path, args: Vec<String>) -> Self {
        Self { binary, args }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Shell-quoted command line, for logs and debug output.
    pub fn command_line(&self) -> String {
        let binary = self.binary.to_string_lossy();
        let words = std::iter::once(&*binary).chain(self.args.iter().map(String::as_str));
        shell_words::join(words)
    }

    fn command(&self) -> Command {
        let mut command = Command::new(self.binary);
        command.args(&self.args).stdin(Stdio::null());
        command
    }

    /// Run with stdout/stderr connected to this process's own streams.
    pub async fn run_inherited(&self) -> Result<(), InvocationError> {
        tracing::debug!("Running {}", self.command_line());

        let status = self
            .command()
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| self.spawn_error(source))?;

        if status.success() {
            Ok(())
        } else {
            Err(self.exit_error(status))
        }
    }

    /// Run with stdout and stderr buffered separately.
    ///
    /// A non-zero exit is not an error here; callers inspect `status` and
    /// decide what the captured streams mean. The child is killed if the
    /// returned future is dropped before it exits.
    pub async fn capture(&self) -> Result<Output, InvocationError> {
        tracing::debug!("Running {} (captured)", self.command_line());

        self.command()
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| self.spawn_error(source))
    }

    pub fn spawn_error(&self, source: std::io::Error) -> InvocationError {
        InvocationError::Spawn {
            command: self.command_line(),
            source,
        }
    }

    pub fn exit_error(&self, status: ExitStatus) -> InvocationError {
        InvocationError::Exit {
            command: self.command_line(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_quotes_arguments() {
        let binary = Path::new("/usr/bin/docker");
        let invocation = Invocation::new(
            binary,
            vec!["run".into(), "bash".into(), "-c".into(), "echo hi".into()],
        );
        assert_eq!(
            invocation.command_line(),
            "/usr/bin/docker run bash -c 'echo hi'"
        );
    }

    #[tokio::test]
    async fn spawn_failure_is_reported() {
        let binary = Path::new("/nonexistent/engine");
        let invocation = Invocation::new(binary, vec!["ps".into()]);
        let err = invocation.run_inherited().await.unwrap_err();
        assert!(matches!(err, InvocationError::Spawn { .. }));
        assert_eq!(err.exit_code(), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_reported_with_code() {
        let binary = Path::new("/bin/sh");
        let invocation = Invocation::new(binary, vec!["-c".into(), "exit 3".into()]);
        let err = invocation.run_inherited().await.unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
        assert!(err.to_string().contains("exit 3"), "got: {err}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn capture_keeps_streams_apart() {
        let binary = Path::new("/bin/sh");
        let invocation = Invocation::new(
            binary,
            vec!["-c".into(), "printf out; printf err >&2; exit 1".into()],
        );
        let output = invocation.capture().await.unwrap();
        assert!(!output.status.success());
        assert_eq!(output.stdout, b"out");
        assert_eq!(output.stderr, b"err");
    }
}
