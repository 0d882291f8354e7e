/// Engagement service: like / unlike with fan-out
///
/// Like existence is a strict function of (post, user). The unique
/// constraint on `likes (user_id, post_id)` is the correctness mechanism for
/// concurrent likes; `INSERT .. ON CONFLICT DO NOTHING RETURNING` tells us
/// atomically whether this request won the row. The Like and its
/// notification commit in one transaction.
use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::services::sink::{NewNotification, NotificationSink};

/// Verb recorded when a post is liked.
pub const VERB_LIKED_POST: &str = "liked your post";

/// Object type recorded for post-targeted notifications.
pub const OBJECT_POST: &str = "post";

#[derive(Clone)]
pub struct EngagementService {
    pool: PgPool,
    sink: Arc<dyn NotificationSink>,
}

impl EngagementService {
    pub fn new(pool: PgPool, sink: Arc<dyn NotificationSink>) -> Self {
        Self { pool, sink }
    }

    /// Like a post on behalf of `actor`.
    ///
    /// Fails with `Conflict` if the actor already likes the post. A
    /// cross-author like records exactly one notification for the post's
    /// author; a self-like records nothing.
    pub async fn like(&self, actor: Uuid, post_id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let author_id: Option<Uuid> =
            sqlx::query_scalar("SELECT author_id FROM posts WHERE id = $1")
                .bind(post_id)
                .fetch_optional(&mut *tx)
                .await?;

        let author_id = author_id
            .ok_or_else(|| AppError::NotFound(format!("post {} does not exist", post_id)))?;

        let inserted: Option<Uuid> = sqlx::query_scalar(
            r#"
            INSERT INTO likes (user_id, post_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, post_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(actor)
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?;

        if inserted.is_none() {
            return Err(AppError::Conflict("You have already liked this post".into()));
        }

        if author_id != actor {
            self.sink
                .record(
                    &mut tx,
                    NewNotification {
                        recipient_id: author_id,
                        actor_id: actor,
                        verb: VERB_LIKED_POST.to_string(),
                        object_type: OBJECT_POST.to_string(),
                        object_id: post_id,
                    },
                )
                .await?;
        }

        tx.commit().await?;

        tracing::debug!(%actor, %post_id, "post liked");
        Ok(())
    }

    /// Remove the actor's like from a post.
    ///
    /// Fails with `Conflict` if no such like exists. No notification side
    /// effect.
    pub async fn unlike(&self, actor: Uuid, post_id: Uuid) -> Result<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
                .bind(post_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(AppError::NotFound(format!("post {} does not exist", post_id)));
        }

        let affected = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(actor)
        .bind(post_id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(AppError::Conflict("You have not liked this post".into()));
        }

        tracing::debug!(%actor, %post_id, "post unliked");
        Ok(())
    }
}
