//! studyhall - study companion relay backend
//!
//! Single-binary HTTP service: frontend asset hosting plus JSON endpoints
//! that relay to the Gemini and YouTube Data APIs.

use anyhow::Result;
use tracing::{error, info};

use studyhall::config::ServiceConfig;
use studyhall::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting studyhall v{}", env!("CARGO_PKG_VERSION"));

    // Both API credentials are required; refuse to serve without them.
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("CRITICAL: {e}");
            std::process::exit(1);
        }
    };

    let addr = format!("127.0.0.1:{}", config.port);
    let static_dir = config.static_dir.clone();

    let state = AppState::new(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("studyhall listening on http://{addr}");
    info!("Serving frontend from {}", static_dir.display());
    info!("Health check: http://{addr}/health");

    axum::serve(listener, app).await?;

    Ok(())
}
