// ABOUTME: Fake engine binary for observing and steering engine invocations.
// ABOUTME: A shell script that logs its argv and replies according to per-test rules.

use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use stevedore::config::ConnectionConfig;
use stevedore::runtime::{CliRuntime, EngineBinary};
use tempfile::TempDir;

// The script finds its per-test state next to the symlink it was invoked
// through. Rules are checked in name order; the first whose pattern occurs
// in the joined argv decides the reply. Unmatched calls exit 0 silently.
const SCRIPT_SOURCE: &str = r#"#!/bin/sh
dir=$(dirname "$0")
printf '%s\n' "$*" >> "$dir/calls.log"
for rule in "$dir"/rules/*; do
  [ -d "$rule" ] || continue
  pattern=$(cat "$rule/pattern")
  case "$*" in
    *"$pattern"*)
      cat "$rule/stdout"
      cat "$rule/stderr" >&2
      exit "$(cat "$rule/code")"
      ;;
  esac
done
exit 0
"#;

struct Script {
    _dir: TempDir,
    path: PathBuf,
}

/// The script is written once per test binary and only ever symlinked
/// afterwards, so no test executes a file another thread is still writing.
fn script_path() -> &'static Path {
    static SCRIPT: OnceLock<Script> = OnceLock::new();
    &SCRIPT
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("create script dir");
            let path = dir.path().join("fake-engine.sh");
            fs::write(&path, SCRIPT_SOURCE).expect("write fake engine");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("chmod fake engine");
            Script { _dir: dir, path }
        })
        .path
}

/// Reply to give when a rule matches.
#[derive(Debug, Clone, Default)]
pub struct Reply {
    code: i32,
    stdout: String,
    stderr: String,
}

impl Reply {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn fail(code: i32) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }

    pub fn stdout(mut self, text: &str) -> Self {
        self.stdout = text.to_string();
        self
    }

    pub fn stderr(mut self, text: &str) -> Self {
        self.stderr = text.to_string();
        self
    }
}

/// A per-test engine: its own call log and rule set.
pub struct FakeEngine {
    dir: TempDir,
    rules: usize,
}

impl FakeEngine {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create engine dir");
        symlink(script_path(), dir.path().join("docker")).expect("link fake engine");
        fs::create_dir(dir.path().join("rules")).expect("create rules dir");
        Self { dir, rules: 0 }
    }

    /// Reply with `reply` to any call whose joined argv contains `pattern`.
    pub fn on(mut self, pattern: &str, reply: Reply) -> Self {
        let rule = self.dir.path().join("rules").join(format!("{:03}", self.rules));
        fs::create_dir(&rule).expect("create rule");
        fs::write(rule.join("pattern"), pattern).unwrap();
        fs::write(rule.join("code"), reply.code.to_string()).unwrap();
        fs::write(rule.join("stdout"), reply.stdout).unwrap();
        fs::write(rule.join("stderr"), reply.stderr).unwrap();
        self.rules += 1;
        self
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("docker")
    }

    /// Scratch directory owned by this engine, for source files and certs.
    pub fn scratch(&self) -> &Path {
        self.dir.path()
    }

    /// Every invocation so far, one argv joined by spaces per entry.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Make the engine disappear, as if it were uninstalled mid-run.
    pub fn uninstall(&self) {
        fs::remove_file(self.path()).expect("remove fake engine");
    }

    pub fn runtime(&self) -> CliRuntime {
        self.runtime_with(ConnectionConfig::local())
    }

    pub fn runtime_with(&self, connection: ConnectionConfig) -> CliRuntime {
        let binary = EngineBinary::at(self.path()).expect("fake engine should resolve");
        CliRuntime::new(connection, binary).expect("valid connection")
    }
}
