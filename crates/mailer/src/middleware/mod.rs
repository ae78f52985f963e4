//! HTTP middleware.

pub mod rate_limit;

pub use rate_limit::email_rate_limiter;
