//! Client configuration.
//!
//! A [`ClientConfig`] can be built in code, deserialized from any `serde`
//! source, or read from the process environment:
//!
//! - `PAGSEGURO_TOKEN` — API token (required)
//! - `PAGSEGURO_ENVIRONMENT` — `production` (default) or `sandbox`
//! - `PAGSEGURO_BASE_URL` — overrides the environment's base URL
//! - `PAGSEGURO_TIMEOUT_SECS` — per-request timeout in seconds

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ENV_BASE_URL, ENV_ENVIRONMENT, ENV_TIMEOUT_SECS, ENV_TOKEN, PRODUCTION_BASE_URL,
    SANDBOX_BASE_URL,
};

/// PagSeguro deployment to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live environment.
    #[default]
    Production,
    /// Test environment; no money moves.
    Sandbox,
}

impl Environment {
    /// Returns the API base URL of this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            _ => Err(ConfigError::InvalidValue {
                variable: ENV_ENVIRONMENT,
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Sandbox => f.write_str("sandbox"),
        }
    }
}

/// Errors raised while loading a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable {0}")]
    MissingVariable(&'static str),

    /// An environment variable holds an unusable value.
    #[error("invalid value for {variable}: {value:?}")]
    InvalidValue {
        /// The variable name.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Configuration for [`PagSeguroClient`](crate::PagSeguroClient).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL (default: production).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value sent verbatim in the `Authorization` header.
    pub token: String,

    /// Per-request timeout in seconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    PRODUCTION_BASE_URL.to_owned()
}

impl ClientConfig {
    /// Creates a config targeting the given environment.
    #[must_use]
    pub fn new(environment: Environment, token: impl Into<String>) -> Self {
        Self {
            base_url: environment.base_url().to_owned(),
            token: token.into(),
            timeout_secs: None,
        }
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout, rounded up to whole seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        let partial = if timeout.subsec_nanos() > 0 { 1 } else { 0 };
        self.timeout_secs = Some(timeout.as_secs().saturating_add(partial));
        self
    }

    /// Returns the configured timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Loads the configuration from `PAGSEGURO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the token is missing or a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_TOKEN).ok_or(ConfigError::MissingVariable(ENV_TOKEN))?;
        let environment = lookup(ENV_ENVIRONMENT)
            .map(|value| value.parse::<Environment>())
            .transpose()?
            .unwrap_or_default();

        let mut config = Self::new(environment, token);
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    variable: ENV_TIMEOUT_SECS,
                    value,
                })?;
            config.timeout_secs = Some(secs);
        }
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
