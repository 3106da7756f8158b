//! studyhall - study companion relay backend
//!
//! Accepts syllabus/topic text from the frontend, relays structured
//! prompts to the Gemini generative-language API and search queries to the
//! YouTube Data API, and reshapes their responses into predictable JSON.
//!
//! Every handler answers well-formed JSON even when an upstream call
//! fails: failures degrade to documented fallback values (empty lists,
//! placeholder strings, a `"#"` URL), never to a 5xx for upstream
//! problems.

pub mod api;
pub mod config;
pub mod error;
pub mod normalize;
pub mod selection;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::services::{GeminiClient, YouTubeClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Process configuration, resolved once at startup
    pub config: ServiceConfig,
    /// Completion service client
    pub gemini: GeminiClient,
    /// Video search client
    pub youtube: YouTubeClient,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> anyhow::Result<Self> {
        let gemini = GeminiClient::new(&config)?;
        let youtube = YouTubeClient::new(&config)?;

        Ok(Self {
            config,
            gemini,
            youtube,
            startup_time: Utc::now(),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        // API routes
        .merge(api::syllabus_routes())
        .merge(api::video_routes())
        .merge(api::study_aid_routes())
        .merge(api::health_routes())
        // Frontend entry document and assets
        .merge(api::ui_routes(&static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
