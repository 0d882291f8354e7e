/// Notification read side
///
/// Recording happens through [`crate::services::sink::NotificationSink`];
/// this service only lists what has accumulated for a recipient.
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::Notification;
use crate::error::Result;

#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Notifications for a recipient, newest first.
    pub async fn notifications_of(
        &self,
        recipient: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, recipient_id, actor_id, verb, object_type, object_id, created_at
            FROM notifications
            WHERE recipient_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(recipient)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }
}
