/// Comment endpoints
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::PaginationParams;
use crate::middleware::ActorId;
use crate::services::CommentService;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// Comment on a post
///
/// POST /api/v1/posts/{id}/comments
pub async fn create_comment(
    service: web::Data<CommentService>,
    actor: ActorId,
    path: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let comment = service.create_comment(actor.0, *path, &req.content).await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Comments on a post, newest first
///
/// GET /api/v1/posts/{id}/comments
pub async fn list_comments(
    service: web::Data<CommentService>,
    path: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let comments = service
        .comments_of(*path, query.clamped_limit(), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Delete a comment (owner only)
///
/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    service: web::Data<CommentService>,
    actor: ActorId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.delete_comment(actor.0, *path).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts/{id}/comments", web::post().to(create_comment))
        .route("/posts/{id}/comments", web::get().to(list_comments))
        .route("/comments/{id}", web::delete().to(delete_comment));
}
