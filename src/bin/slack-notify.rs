use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

use plotnotify::notify::{self, CredentialSource, Notification};

/// Send a message through Slack.
///
/// Exactly one of --token or --config must be given. A flag on the command
/// line wins over the other one set only in the environment.
#[derive(Debug, Parser)]
#[command(name = "slack-notify", version, about)]
struct Args {
    /// Message to send through Slack.
    #[arg(short = 'm', long)]
    message: String,

    /// Slack bot token (default channel: general).
    #[arg(long, env = "SLACK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// JSON file holding the token under "slackKey" (default channel: terminal).
    #[arg(long, env = "SLACK_CONFIG")]
    config: Option<PathBuf>,

    /// Channel to post to, overriding the default.
    #[arg(long, env = "SLACK_CHANNEL")]
    channel: Option<String>,

    /// Slack Web API base URL.
    #[arg(long, env = "SLACK_API_BASE_URL")]
    api_base_url: Option<String>,
}

fn from_command_line(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// Pick the credential source. When both are present, the one typed on the
/// command line is used; two of the same origin are a usage error.
fn credential_source(args: &Args, matches: &ArgMatches) -> Result<CredentialSource> {
    match (&args.token, &args.config) {
        (Some(token), Some(config)) => {
            match (
                from_command_line(matches, "token"),
                from_command_line(matches, "config"),
            ) {
                (true, false) => Ok(CredentialSource::Token(token.clone())),
                (false, true) => Ok(CredentialSource::ConfigFile(config.clone())),
                _ => bail!("--token and --config cannot be used together"),
            }
        }
        (Some(token), None) => Ok(CredentialSource::Token(token.clone())),
        (None, Some(config)) => Ok(CredentialSource::ConfigFile(config.clone())),
        (None, None) => bail!("either --token (SLACK_TOKEN) or --config (SLACK_CONFIG) is required"),
    }
}

fn notification(args: Args, source: CredentialSource) -> Notification {
    let mut notification = Notification::new(source, args.message);
    if let Some(channel) = args.channel {
        notification = notification.with_channel(channel);
    }
    if let Some(url) = args.api_base_url {
        notification = notification.with_api_base_url(url);
    }
    notification
}

fn main() -> Result<()> {
    env_logger::init();
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches)?;

    let source = credential_source(&args, &matches)?;
    let notification = notification(args, source);

    notify::send(&notification).context("failed to send Slack message")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(argv: &[&str]) -> (Args, ArgMatches) {
        let matches = Args::command().try_get_matches_from(argv).unwrap();
        let args = Args::from_arg_matches(&matches).unwrap();
        (args, matches)
    }

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn message_is_required() {
        let err = Args::command()
            .try_get_matches_from(["slack-notify", "--token", "xoxb-t"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn short_and_long_message_flags() {
        let (args, _) = parse(&["slack-notify", "-m", "done", "--token", "t"]);
        assert_eq!(args.message, "done");
        let (args, _) = parse(&["slack-notify", "--message", "done too", "--token", "t"]);
        assert_eq!(args.message, "done too");
    }

    #[test]
    fn token_selects_literal_credential() {
        let (args, matches) = parse(&["slack-notify", "-m", "hi", "--token", "xoxb-t"]);
        let source = credential_source(&args, &matches).unwrap();
        assert!(matches!(source, CredentialSource::Token(ref t) if t == "xoxb-t"));
        assert_eq!(source.default_channel(), "general");
    }

    #[test]
    fn config_alone_selects_config_file() {
        let (args, matches) = parse(&["slack-notify", "-m", "hi", "--config", "slack.json"]);
        let source = credential_source(&args, &matches).unwrap();
        assert!(
            matches!(source, CredentialSource::ConfigFile(ref p) if p == &PathBuf::from("slack.json"))
        );
        assert_eq!(source.default_channel(), "terminal");
    }

    #[test]
    fn both_credentials_on_command_line_is_an_error() {
        let (args, matches) = parse(&[
            "slack-notify",
            "-m",
            "hi",
            "--token",
            "xoxb-t",
            "--config",
            "slack.json",
        ]);
        let err = credential_source(&args, &matches).unwrap_err();
        assert!(err.to_string().contains("cannot be used together"));
    }

    #[test]
    fn neither_credential_is_an_error() {
        let (mut args, matches) = parse(&["slack-notify", "-m", "hi"]);
        // Ignore anything the test environment exports.
        args.token = None;
        args.config = None;
        let err = credential_source(&args, &matches).unwrap_err();
        assert!(err.to_string().contains("--token"));
    }

    #[test]
    fn channel_and_base_url_overrides_reach_the_notification() {
        let (args, _) = parse(&[
            "slack-notify",
            "-m",
            "hi",
            "--token",
            "t",
            "--channel",
            "alerts",
            "--api-base-url",
            "http://127.0.0.1:9999/api",
        ]);
        let n = notification(args, CredentialSource::Token("t".into()));
        assert_eq!(n.text, "hi");
        assert_eq!(n.channel.as_deref(), Some("alerts"));
        assert_eq!(n.api_base_url.as_deref(), Some("http://127.0.0.1:9999/api"));
    }
}
