use std::path::PathBuf;

use thiserror::Error;

/// Failures while obtaining the Slack token from its configuration file.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to read credential file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credential file {} is not valid JSON", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("credential file {} has no '{key}' string field", path.display())]
    MissingKey { path: PathBuf, key: &'static str },
}

/// Errors from posting a message.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The credential could not be resolved; no request was sent.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Slack API returned an error response (ok: false or a non-2xx status).
    #[error("Slack API error: {0}")]
    Api(String),

    /// The API answered with HTTP 429 (Too Many Requests).
    #[error("rate limited by Slack")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = NotifyError::Api("channel_not_found".into());
        assert_eq!(err.to_string(), "Slack API error: channel_not_found");
    }

    #[test]
    fn credential_error_is_transparent() {
        let err: NotifyError = CredentialError::MissingKey {
            path: PathBuf::from("/etc/slack.json"),
            key: "slackKey",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "credential file /etc/slack.json has no 'slackKey' string field"
        );
    }
}
