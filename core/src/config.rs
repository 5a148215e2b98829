//! Executor configuration: where requests go and which token signs them.

use serde::{Deserialize, Serialize};

pub const BASE_URL_VAR: &str = "APIGEN_BASE_URL";
pub const TOKEN_VAR: &str = "APIGEN_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Settings shared by every request an executor sends.
///
/// `base_url` is prepended verbatim to each path. An empty or absent `token`
/// disables the `Authorization` header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read `APIGEN_BASE_URL` and the optional `APIGEN_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_VAR).map_err(|_| ConfigError::MissingVar(BASE_URL_VAR))?;
        Ok(Self {
            base_url,
            token: std::env::var(TOKEN_VAR).ok(),
        })
    }

    /// The token to send, if it is set and non-empty.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}
