//! Mapping from domain entities to response DTOs.

use quill_core::domain::{Post, User};
use quill_shared::dto::{MyProfileResponse, PostResponse, UserResponse};

use crate::middleware::error::{AppError, AppResult};

/// Id of an entity that came back from a repository.
pub fn persisted_id(entity: &str, id: Option<i64>) -> AppResult<i64> {
    id.ok_or_else(|| AppError::Internal(format!("{entity} was returned without an id")))
}

pub fn user_response(user: &User) -> AppResult<UserResponse> {
    Ok(UserResponse {
        id: persisted_id("user", user.id)?,
        email: user.email.clone(),
        nickname: user.nickname.clone(),
        status: user.status.to_string(),
        last_login_at: user.last_login_at,
    })
}

pub fn my_profile_response(user: &User) -> AppResult<MyProfileResponse> {
    Ok(MyProfileResponse {
        id: persisted_id("user", user.id)?,
        email: user.email.clone(),
        nickname: user.nickname.clone(),
        address: user.address.clone(),
        status: user.status.to_string(),
        last_login_at: user.last_login_at,
    })
}

pub fn post_response(post: &Post) -> AppResult<PostResponse> {
    Ok(PostResponse {
        id: persisted_id("post", post.id)?,
        content: post.content.clone(),
        created_at: post.created_at,
        modified_at: post.modified_at,
        writer: user_response(&post.writer)?,
    })
}
