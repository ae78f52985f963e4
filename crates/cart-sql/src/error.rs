//! Store-failure error type for the raw-driver cart service.
//!
//! Every handler performs exactly one store round trip, and the only way a
//! request fails is that round trip failing. The failure is rendered in the
//! legacy envelope, with the driver's error text surfaced verbatim - this
//! service deliberately leaks store errors to the caller, unlike the mailer
//! and mirror services which suppress them.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use shoplab_core::{Action, ActionEnvelope, StatusLine};

/// A failed store operation, tagged with the envelope context it occurred in.
#[derive(Debug)]
pub struct StoreFailure {
    action: Action,
    entity: &'static str,
    source: sqlx::Error,
}

impl StoreFailure {
    /// Wrap a driver error with the action and entity of the failing route.
    #[must_use]
    pub const fn new(action: Action, entity: &'static str, source: sqlx::Error) -> Self {
        Self {
            action,
            entity,
            source,
        }
    }
}

impl IntoResponse for StoreFailure {
    fn into_response(self) -> Response {
        tracing::error!(
            error = %self.source,
            entity = self.entity,
            "Store operation failed"
        );

        let envelope = ActionEnvelope::<()>::failure(
            self.action,
            StatusLine::InternalServerError,
            self.entity,
            self.source.to_string(),
        );

        (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failure_is_500() {
        let failure = StoreFailure::new(Action::Get, "User", sqlx::Error::PoolClosed);
        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
