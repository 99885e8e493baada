// ABOUTME: Path helpers for the two-stage copy-then-rename protocol.
// ABOUTME: The temporary file sits next to the destination so the rename stays atomic.

use std::path::Path;

/// Suffix appended to the destination's base name during the copy stage.
pub const TEMP_SUFFIX: &str = ".tmp";

/// Temporary path for a copy to `destination` inside a container.
///
/// Container paths are always slash-separated. The temporary file is
/// `<dir>/<base>.tmp`, where the base name ignores trailing slashes and the
/// result is lexically cleaned: `/srv/index.html` becomes
/// `/srv/index.html.tmp` and `/etc/app/` becomes `/etc/app/app.tmp`.
pub fn temp_destination(destination: &str) -> String {
    let dir = match destination.rfind('/') {
        Some(i) => &destination[..=i],
        None => "",
    };
    let base = base_name(destination);
    clean(&format!("{}/{base}{TEMP_SUFFIX}", clean(dir)))
}

/// Last element of a slash-separated path, ignoring trailing slashes.
fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Collapse repeated slashes and resolve `.` and `..` elements lexically.
fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last().copied() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Local source path in the form the engine's `cp` expects.
pub fn local_source(path: &Path) -> String {
    let path = path.to_string_lossy();
    if cfg!(windows) {
        path.replace('\\', "/")
    } else {
        path.into_owned()
    }
}
