/// Comment service
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::Comment;
use crate::error::{AppError, Result};
use crate::middleware::permissions::check_comment_ownership;

#[derive(Clone)]
pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a comment on a post.
    pub async fn create_comment(&self, actor: Uuid, post_id: Uuid, content: &str) -> Result<Comment> {
        if content.trim().is_empty() {
            return Err(AppError::Validation("content must not be empty".into()));
        }

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
                .bind(post_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(AppError::NotFound(format!("post {} does not exist", post_id)));
        }

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, author_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, author_id, content, created_at
            "#,
        )
        .bind(post_id)
        .bind(actor)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    /// Comments on a post, newest first.
    pub async fn comments_of(&self, post_id: Uuid, limit: i64, offset: i64) -> Result<Vec<Comment>> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
                .bind(post_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(AppError::NotFound(format!("post {} does not exist", post_id)));
        }

        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, author_id, content, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(post_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    /// Delete a comment. Owner-only.
    pub async fn delete_comment(&self, actor: Uuid, comment_id: Uuid) -> Result<()> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, author_id, content, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("comment {} does not exist", comment_id)))?;

        check_comment_ownership(actor, &comment)?;

        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
