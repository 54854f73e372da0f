use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::config::SlackConfig;
use super::error::NotifyError;
use super::types::{PostMessageRequest, PostMessageResponse};

/// Blocking Slack Web API client bound to one channel.
pub struct SlackClient {
    config: SlackConfig,
    client: Client,
}

impl SlackClient {
    /// Build a client. No request timeout is set; a stalled call blocks until
    /// the connection fails.
    pub fn new(config: SlackConfig) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self { config, client })
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/{method}", self.config.api_base_url)
    }

    /// Post `text` to the configured channel with `chat.postMessage`.
    pub fn post_message(&self, text: &str) -> Result<PostMessageResponse, NotifyError> {
        let url = self.api_url("chat.postMessage");
        let request = PostMessageRequest {
            channel: &self.config.channel,
            text,
        };

        log::debug!("posting message to Slack channel {}", self.config.channel);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.credential.expose())
            .json(&request)
            .send()?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            log::warn!("Slack API rate limit hit");
            return Err(NotifyError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NotifyError::Api(format!("HTTP {status}: {body}")));
        }

        let api_response: PostMessageResponse = response.json()?;

        if !api_response.ok {
            let error_code = api_response
                .error
                .unwrap_or_else(|| "unknown_error".to_owned());
            return Err(NotifyError::Api(error_code));
        }

        log::info!(
            "Message posted to {} (ts {})",
            api_response.channel.as_deref().unwrap_or(&self.config.channel),
            api_response.ts.as_deref().unwrap_or("unknown")
        );

        Ok(api_response)
    }
}
