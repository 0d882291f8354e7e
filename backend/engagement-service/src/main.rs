use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use engagement_service::config::Config;
use engagement_service::handlers;
use engagement_service::middleware::BearerAuth;
use engagement_service::services::{
    CommentService, EngagementService, FeedService, FollowService, NotificationService,
    NotificationSink, PgNotificationSink, PostService,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting engagement-service");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: env={}, port={}",
        config.app.env, config.app.port
    );

    auth_core::jwt::initialize_validation_only(&config.auth.public_key_pem)
        .context("Failed to initialize JWT validation key")?;
    info!("Token validation key loaded");

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("Failed to verify database connection")?;
    info!("Database pool created and verified");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations completed");

    let sink: Arc<dyn NotificationSink> = Arc::new(PgNotificationSink);
    let engagement = EngagementService::new(pool.clone(), sink);
    let follows = FollowService::new(pool.clone());
    let feed = FeedService::new(pool.clone(), follows.clone());
    let posts = PostService::new(pool.clone());
    let comments = CommentService::new(pool.clone());
    let notifications = NotificationService::new(pool.clone());

    let addr = format!("{}:{}", config.app.host, config.app.port);
    info!("Listening on http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(engagement.clone()))
            .app_data(web::Data::new(follows.clone()))
            .app_data(web::Data::new(feed.clone()))
            .app_data(web::Data::new(posts.clone()))
            .app_data(web::Data::new(comments.clone()))
            .app_data(web::Data::new(notifications.clone()))
            .route("/health", web::get().to(|| async { "OK" }))
            .route("/ready", web::get().to(|| async { "READY" }))
            .service(
                web::scope("/api/v1")
                    .wrap(BearerAuth)
                    .configure(handlers::configure),
            )
    })
    .bind(&addr)
    .context("Failed to bind HTTP server")?
    .run()
    .await
    .context("HTTP server error")?;

    info!("engagement-service shutting down");
    Ok(())
}
