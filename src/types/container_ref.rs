// ABOUTME: Container reference passed to the engine verbatim.
// ABOUTME: Performs no syntax validation; the engine decides what a name means.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A container name or ID as understood by the engine.
///
/// Unlike image references, container references are never parsed: an empty
/// or oddly-shaped reference is forwarded as-is and the engine reports
/// whatever it reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerRef(String);

impl ContainerRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContainerRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContainerRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContainerRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}
