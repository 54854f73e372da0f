use std::path::PathBuf;

use serde_json::Value;

use super::error::CredentialError;

/// Default channel when the token is given directly.
pub const TOKEN_DEFAULT_CHANNEL: &str = "general";

/// Default channel when the token comes from a configuration file.
pub const CONFIG_DEFAULT_CHANNEL: &str = "terminal";

/// JSON key holding the token in the configuration file.
pub const SLACK_KEY: &str = "slackKey";

/// A Slack bot or user OAuth token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Where the token comes from.
#[derive(Clone)]
pub enum CredentialSource {
    /// The token itself.
    Token(String),
    /// A JSON file with the token under `slackKey`.
    ConfigFile(PathBuf),
}

impl std::fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::Token(_) => f.write_str("Token([REDACTED])"),
            CredentialSource::ConfigFile(path) => f.debug_tuple("ConfigFile").field(path).finish(),
        }
    }
}

impl CredentialSource {
    /// Produce the token, reading the configuration file if needed.
    pub fn resolve(&self) -> Result<Credential, CredentialError> {
        match self {
            CredentialSource::Token(token) => Ok(Credential::new(token.clone())),
            CredentialSource::ConfigFile(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| CredentialError::Io {
                    path: path.clone(),
                    source,
                })?;
                let root: Value =
                    serde_json::from_str(&text).map_err(|source| CredentialError::Json {
                        path: path.clone(),
                        source,
                    })?;
                // Only a top-level object can carry the key.
                let token = root
                    .as_object()
                    .and_then(|obj| obj.get(SLACK_KEY))
                    .and_then(Value::as_str)
                    .ok_or_else(|| CredentialError::MissingKey {
                        path: path.clone(),
                        key: SLACK_KEY,
                    })?;
                log::debug!("Loaded Slack credential from {}", path.display());
                Ok(Credential::new(token))
            }
        }
    }

    /// Channel used when none is given explicitly.
    pub fn default_channel(&self) -> &'static str {
        match self {
            CredentialSource::Token(_) => TOKEN_DEFAULT_CHANNEL,
            CredentialSource::ConfigFile(_) => CONFIG_DEFAULT_CHANNEL,
        }
    }
}
