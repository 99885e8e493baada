// ABOUTME: Library root for stevedore - drives the docker CLI as a subprocess.
// ABOUTME: The command-line front end is in main.rs.

pub mod config;
pub mod error;
pub mod output;
pub mod runtime;
pub mod types;
