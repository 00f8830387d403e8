//! Application state shared across all handlers.

use crate::config::Config;
use crate::services::NotificationService;

/// Application state shared across handlers.
///
/// Immutable after startup; every request gets a cheap clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Formats and relays notifications to Telegram
    pub notification_service: NotificationService,
}

impl axum::extract::FromRef<AppState> for NotificationService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.notification_service.clone()
    }
}
