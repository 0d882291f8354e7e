/// Like / unlike endpoints
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::ActorId;
use crate::services::EngagementService;

/// Like a post
///
/// POST /api/v1/posts/{id}/like
pub async fn like_post(
    service: web::Data<EngagementService>,
    actor: ActorId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.like(actor.0, *path).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "detail": "Post liked successfully."
    })))
}

/// Remove a like from a post
///
/// POST /api/v1/posts/{id}/unlike
pub async fn unlike_post(
    service: web::Data<EngagementService>,
    actor: ActorId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.unlike(actor.0, *path).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "detail": "Post unliked successfully."
    })))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts/{id}/like", web::post().to(like_post))
        .route("/posts/{id}/unlike", web::post().to(unlike_post));
}
