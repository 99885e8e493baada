// ABOUTME: Builds the engine argument vector from connection config and operation tokens.
// ABOUTME: Global connection and TLS flags always precede the operation's own arguments.

use crate::config::ConnectionConfig;

pub const HOST_FLAG: &str = "--host";
pub const TLS_VERIFY_FLAG: &str = "--tlsverify";

/// Prefix `operation` with the global flags implied by `config`.
///
/// Flag order is fixed: `--host`, `--tlscacert`, `--tlscert`, `--tlskey`,
/// then `--tlsverify` when any TLS file is set. The operation tokens follow
/// untouched, in their original order.
pub fn build_args<I, S>(config: &ConnectionConfig, operation: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = Vec::new();

    if let Some(host) = config.remote_host() {
        args.push(HOST_FLAG.to_string());
        args.push(host.to_string());
    }

    for (which, path) in config.tls_files() {
        args.push(which.flag().to_string());
        args.push(path.to_string_lossy().into_owned());
    }

    if config.uses_tls() {
        args.push(TLS_VERIFY_FLAG.to_string());
    }

    args.extend(operation.into_iter().map(Into::into));
    args
}
