//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use blog_core::DomainError;
use blog_core::domain::{Post, PostDraft};
use blog_shared::MessageResponse;
use blog_shared::dto::PostPayload;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound { id })?;

    Ok(HttpResponse::Ok().json(post))
}

/// The body is read raw so that handlers decide when it is decoded.
fn decode_body(body: &web::Bytes) -> AppResult<PostPayload> {
    PostPayload::from_json(body).map_err(AppError::malformed_body)
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let req = decode_body(&body)?;
    let draft = PostDraft::parse(req.title, req.content)?;

    let post = state.posts.insert(Post::new(state.ids.next_id(), draft)).await?;
    tracing::info!(post_id = post.id, "Post created");

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
///
/// Existence is checked before the body is decoded or validated, so an unknown
/// id wins over a missing, malformed or invalid body.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.find_by_id(id).await?.is_none() {
        return Err(DomainError::NotFound { id }.into());
    }

    let req = decode_body(&body)?;
    let draft = PostDraft::parse(req.title, req.content)?;

    let post = state.posts.update(id, draft).await?;
    tracing::info!(post_id = id, "Post updated");

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::post_deleted()))
}
