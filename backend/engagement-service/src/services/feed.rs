/// Personalized feed query
///
/// A pure read over the follow set: every post authored by a followee,
/// newest first. Ties on created_at break by post id descending so the
/// ordering is total. No caching; the result reflects store state at query
/// time.
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::Result;
use crate::services::follow::FollowService;

#[derive(Clone)]
pub struct FeedService {
    pool: PgPool,
    follows: FollowService,
}

impl FeedService {
    pub fn new(pool: PgPool, follows: FollowService) -> Self {
        Self { pool, follows }
    }

    /// The reverse-chronological feed for `user`.
    pub async fn feed(&self, user: Uuid, limit: i64, offset: i64) -> Result<Vec<Post>> {
        let following = self.follows.following_of(user).await?;

        if following.is_empty() {
            return Ok(Vec::new());
        }

        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, title, content, created_at
            FROM posts
            WHERE author_id = ANY($1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&following)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
