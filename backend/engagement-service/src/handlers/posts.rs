/// Post endpoints
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::handlers::PaginationParams;
use crate::middleware::ActorId;
use crate::services::PostService;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ListPostsParams {
    pub search: Option<String>,
    #[serde(default = "crate::handlers::default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// Create a new post
///
/// POST /api/v1/posts
pub async fn create_post(
    service: web::Data<PostService>,
    actor: ActorId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = service.create_post(actor.0, &req.title, &req.content).await?;

    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
///
/// GET /api/v1/posts/{id}
pub async fn get_post(
    service: web::Data<PostService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post_id = path.into_inner();

    match service.get_post(post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::NotFound(format!("post {} does not exist", post_id))),
    }
}

/// List posts, optionally filtered by a title/content search term
///
/// GET /api/v1/posts
pub async fn list_posts(
    service: web::Data<PostService>,
    query: web::Query<ListPostsParams>,
) -> Result<HttpResponse> {
    let posts = service
        .list_posts(
            query.search.as_deref(),
            query.limit.clamp(1, 100),
            query.offset.max(0),
        )
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Posts authored by a user
///
/// GET /api/v1/users/{id}/posts
pub async fn get_user_posts(
    service: web::Data<PostService>,
    path: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let posts = service
        .posts_of(*path, query.clamped_limit(), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Delete a post (owner only)
///
/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    service: web::Data<PostService>,
    actor: ActorId,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    service.delete_post(actor.0, *path).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts", web::post().to(create_post))
        .route("/posts", web::get().to(list_posts))
        .route("/posts/{id}", web::get().to(get_post))
        .route("/posts/{id}", web::delete().to(delete_post))
        .route("/users/{id}/posts", web::get().to(get_user_posts));
}
