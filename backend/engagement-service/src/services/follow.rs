/// Follow graph service
///
/// Directed edges with the same uniqueness discipline as likes: the unique
/// constraint on `follows (follower_id, followee_id)` closes the
/// check-then-insert race, and the schema's CHECK constraint backs the
/// self-follow rejection.
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct FollowService {
    pool: PgPool,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the edge actor -> target.
    ///
    /// Rejects self-follows, unknown targets, and duplicate edges.
    pub async fn follow(&self, actor: Uuid, target: Uuid) -> Result<()> {
        if actor == target {
            return Err(AppError::Validation("You cannot follow yourself".into()));
        }

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(target)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(AppError::NotFound(format!("user {} does not exist", target)));
        }

        let inserted: Option<Uuid> = sqlx::query_scalar(
            r#"
            INSERT INTO follows (follower_id, followee_id)
            VALUES ($1, $2)
            ON CONFLICT (follower_id, followee_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(actor)
        .bind(target)
        .fetch_optional(&self.pool)
        .await?;

        if inserted.is_none() {
            return Err(AppError::Conflict("You are already following this user".into()));
        }

        tracing::debug!(follower = %actor, followee = %target, "follow edge created");
        Ok(())
    }

    /// Remove the edge actor -> target.
    ///
    /// An absent edge is reported as `Conflict`, mirroring `unlike`.
    pub async fn unfollow(&self, actor: Uuid, target: Uuid) -> Result<()> {
        let affected = sqlx::query(
            r#"
            DELETE FROM follows
            WHERE follower_id = $1 AND followee_id = $2
            "#,
        )
        .bind(actor)
        .bind(target)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(AppError::Conflict("You are not following this user".into()));
        }

        tracing::debug!(follower = %actor, followee = %target, "follow edge removed");
        Ok(())
    }

    /// All followees of the given user.
    pub async fn following_of(&self, user: Uuid) -> Result<Vec<Uuid>> {
        let followees: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT followee_id FROM follows
            WHERE follower_id = $1
            "#,
        )
        .bind(user)
        .fetch_all(&self.pool)
        .await?;

        Ok(followees)
    }
}
