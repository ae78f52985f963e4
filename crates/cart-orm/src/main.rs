//! Shoplab cart service, ORM variant.
//!
//! Serves the same Users/Products/ShoppingCart CRUD API as
//! `shoplab-cart-sql`, on port 3001, with the store access going through
//! sea-orm entities instead of hand-written SQL.
//!
//! # Missing-row policy
//!
//! This variant is `explicit-not-found`: PUT and DELETE fetch the row
//! first and answer 404 when it does not exist. The raw-driver variant
//! answers 200 with zero rows changed. The divergence is part of the
//! exercise contract.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod entities;
mod error;
mod routes;
mod state;

use config::CartOrmConfig;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shoplab_cart_orm=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = CartOrmConfig::from_env().expect("Failed to load configuration");

    // Open the single long-lived ORM connection
    let db = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection established");

    // Ensure the three tables exist, derived from the entity definitions.
    // A failure is logged but does not abort startup; later queries surface
    // store errors at request time.
    if let Err(e) = db::init_schema(&db).await {
        tracing::error!(error = %e, "Failed to initialize schema");
    } else {
        tracing::info!("Schema initialized");
    }

    // Build application state
    let state = AppState::new(db);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("cart-orm listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Teardown: release the store connections before exiting
    if let Err(e) = state.db().clone().close().await {
        tracing::warn!(error = %e, "Error closing database connection");
    } else {
        tracing::info!("Database connection closed");
    }
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
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
