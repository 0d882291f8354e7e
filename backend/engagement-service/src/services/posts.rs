/// Post service - creation, retrieval, listing and deletion
///
/// Deletion cascades to comments and likes through the schema's foreign
/// keys, so removal semantics live in one place.
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::{AppError, Result};
use crate::middleware::permissions::check_post_ownership;

const MAX_TITLE_LENGTH: usize = 255;

#[derive(Clone)]
pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post authored by `actor`.
    pub async fn create_post(&self, actor: Uuid, title: &str, content: &str) -> Result<Post> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("title must not be empty".into()));
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(AppError::Validation(format!(
                "title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        if content.trim().is_empty() {
            return Err(AppError::Validation("content must not be empty".into()));
        }

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (author_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, author_id, title, content, created_at
            "#,
        )
        .bind(actor)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(post_id = %post.id, author = %actor, "post created");
        Ok(post)
    }

    /// Get a post by ID
    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, title, content, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// List posts newest first, optionally filtered by a case-insensitive
    /// substring match over title and content.
    pub async fn list_posts(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, title, content, created_at
            FROM posts
            WHERE $1::text IS NULL
               OR title ILIKE '%' || $1 || '%'
               OR content ILIKE '%' || $1 || '%'
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Posts authored by a user, newest first.
    pub async fn posts_of(&self, author: Uuid, limit: i64, offset: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, title, content, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Delete a post. Owner-only; comments and likes go with it.
    pub async fn delete_post(&self, actor: Uuid, post_id: Uuid) -> Result<()> {
        let post = self
            .get_post(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {} does not exist", post_id)))?;

        check_post_ownership(actor, &post)?;

        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(%post_id, author = %actor, "post deleted");
        Ok(())
    }
}
