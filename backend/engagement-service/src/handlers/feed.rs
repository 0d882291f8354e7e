/// Personalized feed endpoint
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::handlers::PaginationParams;
use crate::middleware::ActorId;
use crate::services::FeedService;

/// Posts from everyone the actor follows, newest first
///
/// GET /api/v1/feed
pub async fn get_feed(
    service: web::Data<FeedService>,
    actor: ActorId,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let posts = service
        .feed(actor.0, query.clamped_limit(), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/feed", web::get().to(get_feed));
}
