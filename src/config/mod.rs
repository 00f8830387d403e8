use anyhow::Result;
use std::env;

use crate::constants::{server, telegram};

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub telegram: TelegramConfig,
}

/// Outbound messaging configuration
#[derive(Clone)]
pub struct TelegramConfig {
    pub api_url: String,
    /// Missing token is allowed at startup; sends fail until it is set
    pub bot_token: Option<String>,
    /// Fallback destination for payment notifications
    pub default_chat_id: Option<String>,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("api_url", &self.api_url)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("default_chat_id", &self.default_chat_id)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        // Must expire before the router's own request timeout, which answers 408
        let request_timeout_secs = match get("TELEGRAM_REQUEST_TIMEOUT_SECS") {
            Some(secs) => secs.parse::<u64>().map_err(|e| {
                anyhow::anyhow!("TELEGRAM_REQUEST_TIMEOUT_SECS must be an integer: {}", e)
            })?,
            None => telegram::DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if request_timeout_secs == 0 || request_timeout_secs >= server::REQUEST_TIMEOUT_SECS {
            return Err(anyhow::anyhow!(
                "TELEGRAM_REQUEST_TIMEOUT_SECS must be between 1 and {}, got {}",
                server::REQUEST_TIMEOUT_SECS - 1,
                request_timeout_secs
            ));
        }

        Ok(Config {
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            host: get("HOST").unwrap_or_else(|| server::DEFAULT_HOST.to_string()),
            port: match get("PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?,
                None => server::DEFAULT_PORT,
            },
            log_format: match get("LOG_FORMAT").as_deref() {
                None | Some("pretty") => LogFormat::Pretty,
                Some("json") => LogFormat::Json,
                Some(other) => {
                    return Err(anyhow::anyhow!(
                        "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                        other
                    ))
                }
            },
            telegram: TelegramConfig {
                api_url: get("TELEGRAM_API_URL")
                    .unwrap_or_else(|| telegram::DEFAULT_API_URL.to_string()),
                bot_token: get("BOT_TOKEN").or_else(|| get("TELEGRAM_BOT_TOKEN")),
                default_chat_id: get("DEFAULT_CHAT_ID").or_else(|| get("TELEGRAM_CHAT_ID")),
                request_timeout_secs,
            },
        })
    }

    /// Socket address string the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
