// ABOUTME: Integration tests against a real local Docker engine.
// ABOUTME: Skipped when no docker binary or reachable daemon is available.

mod support;

use std::path::PathBuf;
use std::time::{Duration, Instant};
use stevedore::config::ConnectionConfig;
use stevedore::runtime::{CliRuntime, ContainerOps, CopyOps, ExecOps, InspectOps};
use stevedore::types::ContainerRef;

/// Get a local runtime whose daemon answers, or None.
async fn local_runtime() -> Option<CliRuntime> {
    let runtime = CliRuntime::connect(ConnectionConfig::local()).ok()?;
    let reachable = runtime
        .invocation(["info", "--format", "{{.ServerVersion}}"])
        .capture()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false);
    reachable.then_some(runtime)
}

/// Skip test if no local runtime available.
macro_rules! require_runtime {
    () => {
        match local_runtime().await {
            Some(rt) => rt,
            None => {
                eprintln!("Skipping test: no local docker engine found");
                return;
            }
        }
    };
}

/// Compose project with one nginx container under a per-test name.
struct NginxProject {
    _dir: tempfile::TempDir,
    compose_file: PathBuf,
    container: ContainerRef,
}

impl NginxProject {
    fn new(test: &str) -> Self {
        let name = format!("stevedore-{}-{}", test, std::process::id());
        let dir = tempfile::tempdir().unwrap();
        let compose_file = dir.path().join("docker-compose.yml");
        let content = format!(
            r#"
name: {name}
services:
  web:
    image: nginx:latest
    container_name: {name}
"#
        );
        std::fs::write(&compose_file, content).unwrap();
        Self {
            _dir: dir,
            compose_file,
            container: ContainerRef::new(name),
        }
    }
}

#[tokio::test]
async fn start_waits_until_running_then_remove() {
    support::init_tracing();
    let runtime = require_runtime!();
    let project = NginxProject::new("start");

    let start = Instant::now();
    runtime
        .start(&project.container, &project.compose_file, true)
        .await
        .expect("start should succeed");
    assert!(start.elapsed() < runtime.wait_settings().timeout + Duration::from_secs(120));
    assert!(runtime.is_running(&project.container).await);

    runtime
        .remove(&project.container)
        .await
        .expect("remove should succeed");
    assert!(!runtime.is_running(&project.container).await);
}

#[tokio::test]
async fn stopped_container_is_not_running() {
    let runtime = require_runtime!();
    let project = NginxProject::new("stop");

    runtime
        .start(&project.container, &project.compose_file, true)
        .await
        .expect("start should succeed");

    runtime
        .stop(&project.container)
        .await
        .expect("stop should succeed");
    assert!(!runtime.is_running(&project.container).await);

    runtime
        .remove(&project.container)
        .await
        .expect("remove should succeed");
}

#[tokio::test]
async fn copy_then_cat_round_trips_content() {
    let runtime = require_runtime!();
    let project = NginxProject::new("copy");

    runtime
        .start(&project.container, &project.compose_file, true)
        .await
        .expect("start should succeed");

    let html = "<html><body><h1>Hello Docker!</h1></body></html>";
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("index.html");
    std::fs::write(&source, html).unwrap();

    let destination = "/usr/share/nginx/html/index.html";
    let copied = runtime
        .copy_to_container(&source, &project.container, destination)
        .await;
    let read = runtime
        .exec(
            &project.container,
            &["cat".to_string(), destination.to_string()],
        )
        .await;

    runtime
        .remove(&project.container)
        .await
        .expect("remove should succeed");

    copied.expect("copy should succeed");
    assert_eq!(String::from_utf8(read.expect("cat should succeed")).unwrap(), html);
}

#[tokio::test]
async fn unknown_container_is_not_running() {
    let runtime = require_runtime!();

    let container = ContainerRef::new(format!("stevedore-absent-{}", std::process::id()));
    assert!(!runtime.is_running(&container).await);
}

#[tokio::test]
async fn exec_in_unknown_container_reports_stderr() {
    let runtime = require_runtime!();

    let container = ContainerRef::new(format!("stevedore-absent-{}", std::process::id()));
    let err = runtime
        .exec(&container, &["true".to_string()])
        .await
        .unwrap_err();
    assert!(
        err.stderr().is_some_and(|s| !s.is_empty()),
        "expected engine stderr in error: {err}"
    );
}
