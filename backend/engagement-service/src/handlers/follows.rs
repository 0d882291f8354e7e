/// Follow / unfollow endpoints
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::ActorId;
use crate::services::FollowService;

/// Follow a user
///
/// POST /api/v1/follow/{user_id}
pub async fn follow_user(
    service: web::Data<FollowService>,
    actor: ActorId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.follow(actor.0, *path).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "detail": "User followed successfully."
    })))
}

/// Unfollow a user
///
/// POST /api/v1/unfollow/{user_id}
pub async fn unfollow_user(
    service: web::Data<FollowService>,
    actor: ActorId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.unfollow(actor.0, *path).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "detail": "User unfollowed successfully."
    })))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/follow/{user_id}", web::post().to(follow_user))
        .route("/unfollow/{user_id}", web::post().to(unfollow_user));
}
