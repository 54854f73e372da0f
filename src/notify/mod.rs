//! Slack notifier: resolve a credential, then post one message with
//! `chat.postMessage`.
//!
//! ```text
//!   --token / SLACK_TOKEN      --config / SLACK_CONFIG
//!            │                          │
//!            └──────► CredentialSource ◄┘
//!                          │ resolve()
//!                          ▼
//!                     SlackConfig ──► SlackClient::post_message
//! ```

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod types;

pub use client::SlackClient;
pub use config::SlackConfig;
pub use credential::{Credential, CredentialSource};
pub use error::{CredentialError, NotifyError};
pub use types::PostMessageResponse;

/// A single message to deliver.
#[derive(Debug, Clone)]
pub struct Notification {
    pub source: CredentialSource,
    pub text: String,
    /// Overrides the credential source's default channel.
    pub channel: Option<String>,
    /// Overrides the Slack Web API base URL.
    pub api_base_url: Option<String>,
}

impl Notification {
    pub fn new(source: CredentialSource, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
            channel: None,
            api_base_url: None,
        }
    }

    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }
}

/// Resolve the credential and post the message.
///
/// Credential problems are reported before any network I/O. There is no retry.
pub fn send(notification: &Notification) -> Result<PostMessageResponse, NotifyError> {
    let credential = notification.source.resolve()?;

    let mut config = SlackConfig::new(credential, notification.source.default_channel());
    if let Some(channel) = &notification.channel {
        config = config.with_channel(channel);
    }
    if let Some(url) = &notification.api_base_url {
        config = config.with_api_base_url(url);
    }

    SlackClient::new(config)?.post_message(&notification.text)
}
