//! Post handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use quill_core::domain::{PostCreate, PostUpdate};
use quill_shared::dto::{PostCreateRequest, PostUpdateRequest};

use super::views::post_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostCreateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state
        .posts
        .create(PostCreate {
            writer_id: req.writer_id,
            content: req.content,
        })
        .await?;

    Ok(HttpResponse::Created().json(post_response(&post)?))
}

/// GET /api/posts/{id}
pub async fn get_post_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post_response(&post)?))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostUpdateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state
        .posts
        .update(
            path.into_inner(),
            PostUpdate {
                content: req.content,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(post_response(&post)?))
}
