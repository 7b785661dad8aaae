//! Command line and environment configuration.
//!
//! Every `serve` flag falls back to an environment variable of the same
//! name, so the service can be configured entirely through its environment.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::sms::adapters::messagebird::{DEFAULT_BASE_URL, MessageBirdConfig};

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(name = "telegraph")]
#[command(about = "Forwards short messages to an SMS provider, splitting long ones")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Runs the HTTP API.
    ///
    /// The server listens for requests to send a message, validates the JSON
    /// payload, and forwards it to the provider. Messages longer than 160
    /// characters are sent as a concatenated message.
    Serve(ServeArgs),
}

/// Options for `telegraph serve`.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Provider API access key.
    #[arg(long, env = "APIKEY", hide_env_values = true)]
    pub apikey: Option<String>,

    /// Base URL of the provider REST API.
    #[arg(long, env = "PROVIDER_URL", default_value = DEFAULT_BASE_URL)]
    pub provider_url: String,

    /// Minimum spacing between provider requests, in milliseconds.
    #[arg(long, env = "THROTTLE_MS", default_value_t = 1000)]
    pub throttle_ms: u64,

    /// Timeout for each provider request, in seconds.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Log messages instead of delivering them.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Errors raised while interpreting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No API key was supplied for a live run.
    #[error("value of apikey is not set")]
    MissingApiKey,
}

impl ServeArgs {
    /// Returns the `host:port` address to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the provider configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no non-empty key was given.
    pub fn messagebird_config(&self) -> Result<MessageBirdConfig, ConfigError> {
        let key = self
            .apikey
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(MessageBirdConfig::new(key)
            .with_base_url(self.provider_url.clone())
            .with_throttle(Duration::from_millis(self.throttle_ms))
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs)))
    }
}
