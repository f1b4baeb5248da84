//! Data Transfer Objects - request/response types for the API.
//!
//! JSON field names are camelCase.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreateRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub nickname: String,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub address: String,
}

/// Request to change the caller's profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserUpdateRequest {
    #[validate(length(min = 1, message = "must not be blank"))]
    pub nickname: String,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub address: String,
}

/// Query string of the email verification link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailQuery {
    pub certification_code: String,
}

/// Request to write a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    pub writer_id: i64,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub content: String,
}

/// Request to edit a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostUpdateRequest {
    #[validate(length(min = 1, message = "must not be blank"))]
    pub content: String,
}

/// Public view of a user; personal fields such as the address are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub status: String,
    pub last_login_at: Option<i64>,
}

/// The caller's own profile, including personal fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyProfileResponse {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub address: String,
    pub status: String,
    pub last_login_at: Option<i64>,
}

/// A post with its writer's public view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub content: String,
    pub created_at: i64,
    pub modified_at: Option<i64>,
    pub writer: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_create_rejects_invalid_email_and_blank_fields() {
        let req = UserCreateRequest {
            email: "not-an-email".to_string(),
            nickname: String::new(),
            address: "Seoul".to_string(),
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("nickname"));
        assert!(!fields.contains_key("address"));
    }

    #[test]
    fn post_create_reads_camel_case_writer_id() {
        let req: PostCreateRequest =
            serde_json::from_str(r#"{"writerId": 1, "content": "helloworld"}"#).unwrap();

        assert_eq!(req.writer_id, 1);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn user_response_omits_address_and_uses_camel_case() {
        let json = serde_json::to_value(UserResponse {
            id: 1,
            email: "kok202@example.com".to_string(),
            nickname: "kok202".to_string(),
            status: "ACTIVE".to_string(),
            last_login_at: None,
        })
        .unwrap();

        assert!(json.get("address").is_none());
        assert!(json["lastLoginAt"].is_null());
        assert_eq!(json["status"], "ACTIVE");
    }
}
