//! The shape of one record in the external user feed.
//!
//! Matches the JSONPlaceholder `/users` payload. The nested address and
//! company records deserialize straight into the document sub-types since
//! the mirror keeps their fields as-is.

use serde::Deserialize;

use super::mirrored_user::{Address, Company};

/// One user record as served by the external feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUser {
    /// The feed's own identifier, used as the mirror's upsert key.
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// A trimmed record in the exact shape the external feed serves.
    const SAMPLE: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn test_deserialize_feed_record() {
        let user: ExternalUser = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }
}
