use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snake_arcade::relay::{self, RelayConfig, DEFAULT_PORT};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let api_key = env::var("XAI_API_KEY")
        .context("XAI_API_KEY must be set in environment or .env file")?;

    let mut config = RelayConfig::new(api_key);
    if let Ok(url) = env::var("UPSTREAM_URL") {
        config.upstream_url = url;
    }
    if let Ok(model) = env::var("UPSTREAM_MODEL") {
        config.model = model;
    }
    if let Ok(timeout_ms) = env::var("UPSTREAM_TIMEOUT_MS") {
        let millis = timeout_ms
            .parse()
            .context("UPSTREAM_TIMEOUT_MS must be an integer")?;
        config.request_timeout = Duration::from_millis(millis);
    }

    let port: u16 = match env::var("PORT") {
        Ok(raw) => raw.parse().context("PORT must be a valid port number")?,
        Err(_) => DEFAULT_PORT,
    };

    let app = relay::router(config);
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;
    info!("chat relay listening on port {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
        .context("relay server error")?;

    Ok(())
}
