// ABOUTME: Timing parameters for the wait-until-running protocol.
// ABOUTME: Parsed from humantime strings like "60s" in the config file.

use serde::Deserialize;
use std::time::Duration;

/// How long to wait for a container to report running, and how often to ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WaitSettings {
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Duration,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            interval: default_interval(),
        }
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_interval() -> Duration {
    Duration::from_secs(1)
}
