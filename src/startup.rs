//! Application startup and initialization logic

use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::config::{Config, LogFormat};
use crate::services::{NotificationService, TelegramClient};

/// Install the global tracing subscriber.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "payment_notifier=debug,tower_http=debug".into());

    match format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

/// Build the services and wrap them in an `AppState`.
///
/// A missing bot token is not fatal: the server still starts and every
/// send fails with a configuration error until the token is provided.
pub fn initialize_app(config: &Config) -> AppState {
    if config.telegram.bot_token.is_none() {
        warn!("⚠️  BOT_TOKEN is not set; Telegram notifications will fail until it is configured");
    }

    match &config.telegram.default_chat_id {
        Some(chat_id) => info!("Default notification chat: {}", chat_id),
        None => info!("No DEFAULT_CHAT_ID configured; payment events must carry chat_id"),
    }

    let telegram_client = TelegramClient::new(&config.telegram);
    info!(
        "✅ Telegram client initialized (API: {}, timeout: {}s)",
        config.telegram.api_url, config.telegram.request_timeout_secs
    );

    let notification_service = NotificationService::new(
        Arc::new(telegram_client),
        config.telegram.default_chat_id.clone(),
    );

    AppState {
        config: config.clone(),
        notification_service,
    }
}

/// Wait for shutdown signal.
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}
