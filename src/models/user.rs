//! Library member model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User row, also its JSON projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    #[serde(rename = "UserID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "MembershipDate")]
    pub membership_date: NaiveDate,
}

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(rename = "Name")]
    #[validate(length(min = 1, max = 255, message = "Name must be 1 to 255 characters"))]
    pub name: String,
    /// Must not belong to another user
    #[serde(rename = "Email")]
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,
    #[serde(rename = "MembershipDate", deserialize_with = "super::date::deserialize")]
    pub membership_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_from_json() {
        let user: CreateUser = serde_json::from_str(
            r#"{"Name": "Ada", "Email": "ada@example.org", "MembershipDate": "2024-01-01"}"#,
        )
        .unwrap();

        assert_eq!(user.name, "Ada");
        assert_eq!(user.membership_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_create_user_requires_every_field() {
        assert!(serde_json::from_str::<CreateUser>(r#"{"Name": "Ada", "Email": "ada@example.org"}"#).is_err());
        assert!(serde_json::from_str::<CreateUser>(
            r#"{"Name": "Ada", "Email": 42, "MembershipDate": "2024-01-01"}"#
        )
        .is_err());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let user = CreateUser {
            name: String::new(),
            email: "ada@example.org".to_string(),
            membership_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_user_projection_keys() {
        let user = User {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
            membership_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({
                "UserID": 7,
                "Name": "Ada",
                "Email": "ada@example.org",
                "MembershipDate": "2024-01-01"
            })
        );
    }
}
