//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::{ADMIN_USER_GRADE, MIN_NAME_LENGTH};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub join_date: DateTime<Utc>,
    /// Stored as given; never returned by the public views
    pub password: String,
    /// National ID number
    pub ssn: String,
}

/// Name must hold at least `MIN_NAME_LENGTH` characters.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if (name.chars().count() as u64) < MIN_NAME_LENGTH {
        let mut err = ValidationError::new("length");
        err.message = Some(
            format!("Name must be at least {} characters", MIN_NAME_LENGTH).into(),
        );
        return Err(err);
    }
    Ok(())
}

/// Join date must lie strictly in the past.
fn validate_past(join_date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *join_date >= Utc::now() {
        let mut err = ValidationError::new("past");
        err.message = Some("Join date must be in the past".into());
        return Err(err);
    }
    Ok(())
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Display name (minimum 2 characters)
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Kenneth", min_length = 2)]
    pub name: String,
    /// Date the user joined; must be in the past
    #[validate(custom(function = "validate_past"))]
    pub join_date: DateTime<Utc>,
    /// Plain password
    #[schema(example = "pass1111")]
    pub password: String,
    /// National ID number
    #[schema(example = "701010-1111111")]
    pub ssn: String,
}

/// Whole-record replacement of an existing user, addressed by embedded ID
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    /// ID of the user to replace
    #[schema(example = 1)]
    pub id: i32,
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Kenneth", min_length = 2)]
    pub name: String,
    #[validate(custom(function = "validate_past"))]
    pub join_date: DateTime<Utc>,
    pub password: String,
    pub ssn: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User display name
    #[schema(example = "Kenneth")]
    pub name: String,
    /// Date the user joined
    pub join_date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            join_date: user.join_date,
        }
    }
}

/// Admin field-filtered view: `id`, `name`, `joinDate`, `password`
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserView {
    pub id: i32,
    pub name: String,
    pub join_date: DateTime<Utc>,
    pub password: String,
}

impl From<User> for AdminUserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            join_date: user.join_date,
            password: user.password,
        }
    }
}

/// Admin field-filtered view, version 2: adds the membership `grade`
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserViewV2 {
    pub id: i32,
    pub name: String,
    pub join_date: DateTime<Utc>,
    pub password: String,
    #[schema(example = "VIP")]
    pub grade: String,
}

impl From<User> for AdminUserViewV2 {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            join_date: user.join_date,
            password: user.password,
            grade: ADMIN_USER_GRADE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn create_request(name: &str, join_date: DateTime<Utc>) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            join_date,
            password: "pass1111".to_string(),
            ssn: "701010-1111111".to_string(),
        }
    }

    fn test_user() -> User {
        User {
            id: 1,
            name: "Kenneth".to_string(),
            join_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            password: "pass1111".to_string(),
            ssn: "701010-1111111".to_string(),
        }
    }

    #[test]
    fn test_valid_create_request() {
        let request = create_request("Kenneth", Utc::now() - Duration::days(1));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_name_too_short() {
        let request = create_request("K", Utc::now() - Duration::days(1));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_name_length_counts_characters() {
        // Two characters, six bytes
        let request = create_request("민구", Utc::now() - Duration::days(1));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_future_join_date_rejected() {
        let request = create_request("Kenneth", Utc::now() + Duration::days(1));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("join_date"));
    }

    #[test]
    fn test_public_view_hides_secrets() {
        let json = serde_json::to_value(UserResponse::from(test_user())).unwrap();
        assert_eq!(json["name"], "Kenneth");
        assert!(json.get("joinDate").is_some());
        assert!(json.get("password").is_none());
        assert!(json.get("ssn").is_none());
    }

    #[test]
    fn test_admin_view_field_allow_list() {
        let json = serde_json::to_value(AdminUserView::from(test_user())).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["id", "joinDate", "name", "password"]);
    }

    #[test]
    fn test_admin_view_v2_adds_grade() {
        let json = serde_json::to_value(AdminUserViewV2::from(test_user())).unwrap();
        assert_eq!(json["grade"], "VIP");
        assert!(json.get("ssn").is_none());
    }
}
