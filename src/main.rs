use anyhow::Result;
use tracing::info;

use payment_notifier::config::Config;
use payment_notifier::router::build_router;
use payment_notifier::startup::{init_tracing, initialize_app, shutdown_signal};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);
    info!("Loaded configuration for environment: {}", config.environment);

    let app_state = initialize_app(&config);
    let app = build_router(app_state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Payment notifier listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
