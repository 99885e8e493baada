// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines connection flags, output modes, and one subcommand per operation.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stevedore")]
#[command(about = "Start, stop, inspect and copy files into containers via the docker CLI")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only print final results
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to stevedore.yml in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the connection settings in the config file.
#[derive(Args)]
pub struct ConnectionArgs {
    /// Path to the engine binary
    #[arg(long, global = true)]
    pub engine: Option<PathBuf>,

    /// Remote engine endpoint
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// Trust certs signed only by this CA
    #[arg(long = "tlscacert", global = true)]
    pub tls_ca_cert: Option<PathBuf>,

    /// TLS certificate file
    #[arg(long = "tlscert", global = true)]
    pub tls_cert: Option<PathBuf>,

    /// TLS key file
    #[arg(long = "tlskey", global = true)]
    pub tls_key: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bring up a compose project in the background
    Up {
        /// Compose file to bring up
        #[arg(short, long)]
        file: PathBuf,

        /// Container to wait for
        container: String,

        /// Wait until the container reports running
        #[arg(long)]
        wait: bool,
    },

    /// Stop and remove a container
    Down { container: String },

    /// Stop a container
    Stop { container: String },

    /// Copy a local file into a container (CONTAINER:PATH)
    Cp { source: PathBuf, destination: String },

    /// Print whether a container is running
    Running { container: String },

    /// Wait until a container reports running
    Wait {
        container: String,

        /// Give up after this many seconds
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,
    },

    /// Follow a container's logs
    Logs { container: String },

    /// Run a shell command in a throwaway container
    Run {
        /// Image to run
        image: String,

        /// Command passed to `bash -c`
        command: String,

        /// Working directory inside the container
        #[arg(short, long)]
        workdir: Option<String>,

        /// Volume mount (repeatable)
        #[arg(short, long = "volume")]
        volumes: Vec<String>,

        /// Host user ID exported as HOST_UID
        #[arg(long)]
        uid: Option<String>,

        /// Host group ID exported as HOST_GID
        #[arg(long)]
        gid: Option<String>,

        /// Extra option passed to `run` (repeatable)
        #[arg(long = "option", allow_hyphen_values = true)]
        options: Vec<String>,

        /// Print the engine command before running it
        #[arg(long)]
        debug: bool,
    },

    /// Run a command in a running container and print its output
    Exec {
        container: String,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },
}
