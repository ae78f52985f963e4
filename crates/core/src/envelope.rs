//! The legacy response envelope shared by both cart services.
//!
//! Every cart endpoint answers with the same outer JSON shape,
//! keyed by the entity it operates on:
//!
//! ```json
//! { "action": "GET", "status": "200 OK", "User": [ ... ] }
//! { "action": "PUT", "status": "404 Not Found", "Product": [], "error": "Product not found" }
//! ```
//!
//! The entity key varies per endpoint (`User`, `Product`, `ShoppingCart`),
//! so [`ActionEnvelope`] carries the key name and implements `Serialize`
//! by hand. On failure the entity key holds an empty array.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The HTTP verb an envelope reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Get,
    Post,
    Put,
    Delete,
}

/// The human-readable status line carried inside the envelope body.
///
/// Matches the HTTP status of the response itself; the body duplicates it
/// because the wire contract says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Ok,
    NotFound,
    InternalServerError,
}

impl StatusLine {
    /// The exact string emitted on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "200 OK",
            Self::NotFound => "404 Not Found",
            Self::InternalServerError => "500 Internal Server Error",
        }
    }
}

impl serde::Serialize for StatusLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// `{action, status, <EntityName>: payload, error?}` response envelope.
///
/// `payload` of `None` serializes the entity key as an empty array, which
/// is what the error responses carry.
#[derive(Debug)]
pub struct ActionEnvelope<T> {
    action: Action,
    status: StatusLine,
    entity: &'static str,
    payload: Option<T>,
    error: Option<String>,
}

impl<T> ActionEnvelope<T> {
    /// Successful envelope wrapping `payload` under `entity`.
    #[must_use]
    pub const fn ok(action: Action, entity: &'static str, payload: T) -> Self {
        Self {
            action,
            status: StatusLine::Ok,
            entity,
            payload: Some(payload),
            error: None,
        }
    }

    /// Failure envelope: the entity key carries `[]` and `error` the message.
    #[must_use]
    pub const fn failure(
        action: Action,
        status: StatusLine,
        entity: &'static str,
        error: String,
    ) -> Self {
        Self {
            action,
            status,
            entity,
            payload: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> Serialize for ActionEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 3 + usize::from(self.error.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("action", &self.action)?;
        map.serialize_entry("status", &self.status)?;
        match &self.payload {
            Some(payload) => map.serialize_entry(self.entity, payload)?,
            None => map.serialize_entry(self.entity, &[0u8; 0])?,
        }
        if let Some(error) = &self.error {
            map.serialize_entry("error", error)?;
        }
        map.end()
    }
}
