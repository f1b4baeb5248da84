//! User account handlers.

use actix_web::{HttpResponse, http::header, web};
use validator::Validate;

use quill_core::domain::{UserCreate, UserUpdate};
use quill_shared::dto::{UserCreateRequest, UserUpdateRequest, VerifyEmailQuery};

use super::views::{my_profile_response, persisted_id, user_response};
use crate::middleware::caller::CallerEmail;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<UserCreateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let user = state
        .users
        .create(UserCreate {
            email: req.email,
            nickname: req.nickname,
            address: req.address,
        })
        .await?;

    tracing::info!(user_id = ?user.id, "User registered, certification mail dispatched");
    Ok(HttpResponse::Created().json(user_response(&user)?))
}

/// GET /api/users/{id}
pub async fn get_user_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let user = state.users.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user_response(&user)?))
}

/// GET /api/users/{id}/verify?certificationCode=...
///
/// Redirects the browser once the account is active.
pub async fn verify_email(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<VerifyEmailQuery>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state
        .users
        .verify_email(id, &query.certification_code)
        .await?;

    tracing::info!(user_id = id, "Email verified");
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, state.verify_redirect_url.as_str()))
        .finish())
}

/// GET /api/users/me
///
/// Fetching one's own profile counts as a login.
pub async fn get_my_info(
    state: web::Data<AppState>,
    caller: CallerEmail,
) -> AppResult<HttpResponse> {
    let user = state.users.get_by_email(caller.as_str()).await?;
    let user = state
        .users
        .login(persisted_id("user", user.id)?)
        .await?;

    Ok(HttpResponse::Ok().json(my_profile_response(&user)?))
}

/// PUT /api/users/me
pub async fn update_my_info(
    state: web::Data<AppState>,
    caller: CallerEmail,
    body: web::Json<UserUpdateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let user = state.users.get_by_email(caller.as_str()).await?;
    let user = state
        .users
        .update(
            persisted_id("user", user.id)?,
            UserUpdate {
                nickname: req.nickname,
                address: req.address,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(my_profile_response(&user)?))
}
