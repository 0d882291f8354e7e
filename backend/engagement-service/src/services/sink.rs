/// Notification sink
///
/// The engagement side only ever appends: a notification is recorded inside
/// the caller's transaction so the triggering write and its fan-out commit
/// or roll back together.
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::error::Result;

/// A notification about to be recorded.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub recipient_id: Uuid,
    pub actor_id: Uuid,
    pub verb: String,
    pub object_type: String,
    pub object_id: Uuid,
}

/// Durable "actor did X to target for recipient" log.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Append one entry within the caller's transaction.
    async fn record(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        notification: NewNotification,
    ) -> Result<()>;
}

/// Sink backed by the service's own `notifications` table.
pub struct PgNotificationSink;

#[async_trait]
impl NotificationSink for PgNotificationSink {
    async fn record(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        notification: NewNotification,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (recipient_id, actor_id, verb, object_type, object_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(notification.recipient_id)
        .bind(notification.actor_id)
        .bind(notification.verb)
        .bind(notification.object_type)
        .bind(notification.object_id)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
