/// Notification endpoints
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::handlers::PaginationParams;
use crate::middleware::ActorId;
use crate::services::NotificationService;

/// The actor's notifications, newest first
///
/// GET /api/v1/notifications
pub async fn list_notifications(
    service: web::Data<NotificationService>,
    actor: ActorId,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let notifications = service
        .notifications_of(actor.0, query.clamped_limit(), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(notifications))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/notifications", web::get().to(list_notifications));
}
