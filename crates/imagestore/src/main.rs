//! Shoplab imagestore - image upload and file management.
//!
//! Accepts single-image multipart uploads (JPEG/PNG/GIF, 5 MiB ceiling),
//! stores them in one flat directory under generated names, and serves
//! them back as static content under `/uploads/*`. There is no index:
//! the listing endpoint scans the directory at request time.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod routes;
mod services;
mod state;

use config::ImagestoreConfig;
use services::images::{ImageStore, MAX_IMAGE_BYTES};
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shoplab_imagestore=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ImagestoreConfig::from_env().expect("Failed to load configuration");

    // Build application state. The uploads directory itself is created
    // lazily on the first successful upload.
    let store = ImageStore::new(config.upload_dir.clone(), config.base_url.clone());
    let state = AppState::new(store);

    // Build router. The body limit leaves room for multipart framing; the
    // per-file ceiling is enforced while receiving so an oversized image
    // gets its own 400 instead of a bare 413.
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES * 2))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("imagestore listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
