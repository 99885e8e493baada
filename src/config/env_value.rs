// ABOUTME: Config values that are either literals or environment variable references.
// ABOUTME: Lets TLS paths and the remote host come from the environment.

use super::error::{ConfigError, MissingEnvVarSnafu};
use serde::Deserialize;
use snafu::OptionExt;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl EnvValue {
    pub fn resolve(&self) -> Result<String, ConfigError> {
        match self {
            EnvValue::Literal(s) => Ok(s.clone()),
            EnvValue::FromEnv { var, default } => match std::env::var(var) {
                Ok(val) => Ok(val),
                Err(_) => default.clone().context(MissingEnvVarSnafu { var }),
            },
        }
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        EnvValue::Literal(value.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        EnvValue::Literal(value)
    }
}

/// Resolve an optional value, treating an empty result as unset.
pub fn resolve_optional(value: Option<&EnvValue>) -> Result<Option<String>, ConfigError> {
    match value {
        Some(v) => v.resolve().map(|s| Some(s).filter(|s| !s.is_empty())),
        None => Ok(None),
    }
}
