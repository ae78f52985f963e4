//! Request error type for the ORM cart service.
//!
//! Two failure modes exist: the targeted row is missing (404, this
//! variant's `explicit-not-found` policy) or the store call failed (500,
//! with the ORM's error text surfaced verbatim, matching the raw-driver
//! variant).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;

use shoplab_core::{Action, ActionEnvelope, StatusLine};

/// A failed request, tagged with the envelope context it occurred in.
#[derive(Debug)]
pub struct RequestError {
    action: Action,
    entity: &'static str,
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// The row addressed by the path id does not exist.
    NotFound,
    /// The store call failed.
    Store(DbErr),
}

impl RequestError {
    /// The path id matched no row.
    #[must_use]
    pub const fn not_found(action: Action, entity: &'static str) -> Self {
        Self {
            action,
            entity,
            kind: ErrorKind::NotFound,
        }
    }

    /// Wrap an ORM error with the action and entity of the failing route.
    #[must_use]
    pub const fn store(action: Action, entity: &'static str, source: DbErr) -> Self {
        Self {
            action,
            entity,
            kind: ErrorKind::Store(source),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, status_line, message) = match &self.kind {
            ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                StatusLine::NotFound,
                format!("{} not found", self.entity),
            ),
            ErrorKind::Store(source) => {
                tracing::error!(
                    error = %source,
                    entity = self.entity,
                    "Store operation failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    StatusLine::InternalServerError,
                    source.to_string(),
                )
            }
        };

        let envelope =
            ActionEnvelope::<()>::failure(self.action, status_line, self.entity, message);

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_404() {
        let response = RequestError::not_found(Action::Put, "User").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_error_is_500() {
        let err = RequestError::store(
            Action::Post,
            "ShoppingCart",
            DbErr::Custom("violates foreign key constraint".to_owned()),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
