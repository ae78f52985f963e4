//! User entity models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shoplab_core::UserId;

/// Envelope key for user responses.
pub const ENTITY: &str = "User";

/// A user row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "RegistrationDate")]
    pub registration_date: NaiveDate,
}

/// The client-supplied fields of a user (everything but the id).
///
/// Used as the POST/PUT request body and echoed back in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFields {
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "RegistrationDate")]
    pub registration_date: NaiveDate,
}

impl UserFields {
    /// Attach an id, producing a full row for echo responses.
    #[must_use]
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            full_name: self.full_name,
            address: self.address,
            registration_date: self.registration_date,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_pascal_case() {
        let user = User {
            user_id: UserId::new(1),
            full_name: "Ada Lovelace".to_owned(),
            address: "12 Analytical Row".to_owned(),
            registration_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "UserId": 1,
                "FullName": "Ada Lovelace",
                "Address": "12 Analytical Row",
                "RegistrationDate": "2024-03-01"
            })
        );
    }

    #[test]
    fn test_fields_deserialize_pascal_case() {
        let fields: UserFields = serde_json::from_str(
            r#"{"FullName": "Ada", "Address": "Row 12", "RegistrationDate": "2024-03-01"}"#,
        )
        .unwrap();
        assert_eq!(fields.full_name, "Ada");

        let user = fields.into_user(UserId::new(9));
        assert_eq!(user.user_id, UserId::new(9));
        assert_eq!(user.address, "Row 12");
    }
}
