//! Loosely-typed policy configuration.
//!
//! [`PolicyConfig`] deserializes from any `serde` format and accepts the shapes that
//! hand-written configuration files tend to use: a bare string where a list is expected,
//! `"true"` for a boolean and `"3600"` for an integer. Unknown keys are ignored.
//!
//! ```
//! use cors_engine::{Policy, PolicyConfig};
//!
//! let config: PolicyConfig = serde_json::from_str(
//!     r#"{"allowOrigins": "https://app.example", "maxAge": "600"}"#,
//! ).unwrap();
//! let policy = Policy::try_from(config).unwrap();
//!
//! assert_eq!(policy.allow_origins(), ["https://app.example"]);
//! assert_eq!(policy.max_age(), 600);
//! ```

use crate::error::ConfigError;
use crate::policy::{Policy, PolicyOptions};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyConfig {
    #[serde(alias = "allow_methods")]
    pub allow_methods: OneOrMany,
    #[serde(alias = "allow_headers")]
    pub allow_headers: OneOrMany,
    #[serde(alias = "allow_origins")]
    pub allow_origins: OneOrMany,
    #[serde(alias = "allow_credentials")]
    pub allow_credentials: Option<Flag>,
    #[serde(alias = "expose_headers")]
    pub expose_headers: OneOrMany,
    #[serde(alias = "max_age")]
    pub max_age: Option<Seconds>,
}

/// A list value that may also be written as a single string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub fn coerce(&self) -> Result<bool, ConfigError> {
        match self {
            Self::Bool(value) => Ok(*value),
            Self::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" | "" => Ok(false),
                _ => Err(ConfigError::InvalidFlag(text.clone())),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Seconds {
    Int(u64),
    Text(String),
}

impl Seconds {
    pub fn coerce(&self) -> Result<u64, ConfigError> {
        match self {
            Self::Int(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidMaxAge(text.clone())),
        }
    }
}

impl PolicyConfig {
    pub fn into_options(self) -> Result<PolicyOptions, ConfigError> {
        let allow_credentials = match &self.allow_credentials {
            Some(flag) => flag.coerce()?,
            None => false,
        };
        let max_age = match &self.max_age {
            Some(seconds) => seconds.coerce()?,
            None => 0,
        };

        Ok(PolicyOptions {
            allow_methods: self.allow_methods.into_vec(),
            allow_headers: self.allow_headers.into_vec(),
            allow_origins: self.allow_origins.into_vec(),
            allow_credentials,
            expose_headers: self.expose_headers.into_vec(),
            max_age,
        })
    }
}

impl TryFrom<PolicyConfig> for Policy {
    type Error = ConfigError;

    fn try_from(config: PolicyConfig) -> Result<Self, Self::Error> {
        Policy::new(config.into_options()?)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
