//! Shoplab mailer - transactional welcome-email relay.
//!
//! Exposes a single `POST /api/email/send` endpoint that validates the
//! submitted address, rate-limits callers per IP (5 requests per 15
//! minutes), and relays a fixed welcome template through SMTP.
//!
//! Unlike the cart services, relay failures are never surfaced to the
//! caller; the handler answers a generic 500 and the underlying SMTP
//! error goes to the log only.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod middleware;
mod routes;
mod services;
mod state;

use config::MailerConfig;
use services::email::EmailService;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shoplab_mailer=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = MailerConfig::from_env().expect("Failed to load configuration");

    // Build the SMTP transport
    let email = EmailService::new(&config.email).expect("Failed to build SMTP transport");

    // Verify relay connectivity; a failure is logged, not fatal, so the
    // service still starts and individual sends fail at request time.
    match email.verify().await {
        Ok(true) => tracing::info!("SMTP relay is ready to send emails"),
        Ok(false) => tracing::warn!("SMTP relay refused the connection test"),
        Err(e) => tracing::error!(error = %e, "SMTP connection test failed"),
    }

    // Build application state
    let state = AppState::new(email);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server. ConnectInfo is required so the rate limiter can fall
    // back to the peer address when no proxy headers are present.
    let addr = config.socket_addr();
    tracing::info!("mailer listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the SMTP relay.
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
