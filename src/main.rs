// ABOUTME: Entry point for the stevedore CLI application.
// ABOUTME: Loads configuration, builds the runtime handle, and dispatches subcommands.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, ConnectionArgs};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use stevedore::config::{Config, EnvValue};
use stevedore::error::{Error, Result};
use stevedore::output::{Output, OutputMode};
use stevedore::runtime::{ContainerOps, CopyOps, ExecOps, InspectOps, LogOps, RunOps, RunSpec};
use stevedore::types::ContainerRef;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let output = Output::new(mode);

    if let Err(e) = run(cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let runtime = apply_overrides(config, cli.connection).runtime()?;

    match cli.command {
        Commands::Up {
            file,
            container,
            wait,
        } => {
            let container = ContainerRef::new(container);
            output.progress(&format!("  → Bringing up {}...", file.display()));
            runtime.start(&container, &file, wait).await?;
            output.success(&format!("Started {container}"));
        }
        Commands::Down { container } => {
            let container = ContainerRef::new(container);
            output.progress(&format!("  → Stopping and removing {container}..."));
            runtime.remove(&container).await?;
            output.success(&format!("Removed {container}"));
        }
        Commands::Stop { container } => {
            let container = ContainerRef::new(container);
            runtime.stop(&container).await?;
            output.success(&format!("Stopped {container}"));
        }
        Commands::Cp {
            source,
            destination,
        } => {
            let (container, path) = destination.split_once(':').ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "destination must be CONTAINER:PATH, got `{destination}`"
                ))
            })?;
            let container = ContainerRef::new(container);
            runtime.copy_to_container(&source, &container, path).await?;
            output.success(&format!("Copied {} to {container}:{path}", source.display()));
        }
        Commands::Running { container } => {
            let running = runtime.is_running(&ContainerRef::new(container.clone())).await;
            output.running(&container, running);
        }
        Commands::Wait { container, timeout } => {
            let container = ContainerRef::new(container);
            let timeout = timeout
                .map(Duration::from_secs)
                .unwrap_or(runtime.wait_settings().timeout);
            output.progress(&format!("  → Waiting up to {timeout:?} for {container}..."));
            runtime.wait_until_running(&container, timeout).await?;
            output.success(&format!("{container} is running"));
        }
        Commands::Logs { container } => {
            runtime.stream_logs(&ContainerRef::new(container)).await?;
        }
        Commands::Run {
            image,
            command,
            workdir,
            volumes,
            uid,
            gid,
            options,
            debug,
        } => {
            let spec = RunSpec {
                command,
                work_dir: workdir,
                image,
                uid,
                gid,
                volumes,
                extra_options: options,
                debug,
            };
            runtime.run_ephemeral(&spec).await?;
        }
        Commands::Exec { container, command } => {
            let stdout = runtime.exec(&ContainerRef::new(container), &command).await?;
            std::io::stdout().write_all(&stdout)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::discover(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// Command-line flags win over the config file.
fn apply_overrides(mut config: Config, args: ConnectionArgs) -> Config {
    if let Some(engine) = args.engine {
        config.engine = Some(engine);
    }
    if let Some(host) = args.host {
        config.host = Some(EnvValue::Literal(host));
    }
    if let Some(path) = args.tls_ca_cert {
        config.tls.ca_cert = Some(path_value(&path));
    }
    if let Some(path) = args.tls_cert {
        config.tls.cert = Some(path_value(&path));
    }
    if let Some(path) = args.tls_key {
        config.tls.key = Some(path_value(&path));
    }
    config
}

fn path_value(path: &Path) -> EnvValue {
    EnvValue::Literal(path.to_string_lossy().into_owned())
}
