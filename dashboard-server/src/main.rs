//! Freshness Ledger Dashboard Server
//!
//! Backend for the food-freshness demo dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  FRESHNESS DASHBOARD                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  API      │  │  Session  │  │  Model Adapter          │ │
//! │  │  (Axum)   │──│  Registry │  │  (ONNX / fallback)      │ │
//! │  └───────────┘  └─────┬─────┘  └────────────┬────────────┘ │
//! │                       ▼                     │              │
//! │          ┌──────────────────────────┐       │              │
//! │          │ Session: ledger + tally  │◄──────┘              │
//! │          └──────────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod sessions;
mod models;
mod handlers;
mod middleware;
mod error;


use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use freshness_core::ModelAdapter;

pub use error::{AppError, AppResult};
use sessions::SessionRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_logging(&config);

    tracing::info!("Freshness Ledger dashboard starting...");
    tracing::info!("Environment: {}", config.environment);

    // Load model once for the whole process
    let model = ModelAdapter::load_or_fallback(&config.model_path);
    if model.method() == "fallback" && config.is_production() {
        tracing::warn!("No trained model at {} - predictions use fallback heuristics", config.model_path.display());
    }

    let state = AppState {
        sessions: Arc::new(SessionRegistry::new(
            chrono::Duration::minutes(config.session_idle_minutes),
            config.max_sessions,
            config.rng_seed,
        )),
        model: Arc::new(model),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await
        .context("Server error")?;

    Ok(())
}

fn init_logging(config: &config::Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dashboard_server=debug,freshness_core=info,tower_http=debug".into());

    if config.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub model: Arc<ModelAdapter>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/model", get(handlers::model::status))
        .route("/api/v1/sessions", post(handlers::sessions::open));

    // Session routes - require X-Session-Id
    let session_routes = Router::new()
        .route(
            "/api/v1/sessions/current",
            get(handlers::sessions::current).delete(handlers::sessions::close),
        )

        // Predictions
        .route("/api/v1/predictions/defaults", get(handlers::predictions::defaults))
        .route("/api/v1/predictions", post(handlers::predictions::predict))

        // Ledger
        .route("/api/v1/records", get(handlers::records::list))
        .route("/api/v1/records/export", get(handlers::records::export_csv))

        // Batches
        .route("/api/v1/batches", get(handlers::batches::list))
        .route("/api/v1/batches/:batch_id/records", get(handlers::batches::records))
        .route("/api/v1/batches/:batch_id/timeline", get(handlers::batches::timeline))

        // Tally
        .route("/api/v1/tally", get(handlers::tally::snapshot))

        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::session::require_session
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
