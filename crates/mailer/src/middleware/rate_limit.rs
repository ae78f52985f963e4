//! Rate limiting middleware using governor and `tower_governor`.
//!
//! The send endpoint is bounded to 5 requests per 15-minute window per
//! client IP. Requests over the limit get `tower_governor`'s fixed
//! plain-text rejection and never reach the handler, so the SMTP relay is
//! not contacted for them.

use std::sync::Arc;

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Rate limiter layer type for Axum.
///
/// Uses `SmartIpKeyExtractor`, which reads the usual proxy headers
/// (`x-forwarded-for`, `x-real-ip`, `forwarded`) and falls back to the
/// peer address, so the server must be started with `ConnectInfo`.
pub type RateLimiterLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create the rate limiter for the send endpoint: 5 requests per
/// 15 minutes per IP.
///
/// Configuration: 1 token replenished every 180 seconds, burst of 5.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid
/// positive integers (`per_second(180)` and `burst_size(5)`), which are
/// always accepted by `GovernorConfigBuilder`.
#[must_use]
pub fn email_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(180) // Replenish 1 token every 180 seconds (~5 per 15 min)
        .burst_size(5) // Allow the full window up front
        .finish()
        .expect("rate limiter config with per_second(180) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}
