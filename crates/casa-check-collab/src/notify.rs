//! Notification emitter and the owner-only read/delete operations.

use casa_check_core::adapters::DatabaseAdapter;
use casa_check_core::error::CollabResult;
use casa_check_core::types::{CreateNotification, Notification, User};

use crate::context::CollabContext;

/// Append a notification row, fire-and-forget.
///
/// Notifications are best-effort UX: a failed write is logged and swallowed
/// so it can never roll back or block the business operation that triggered
/// it. The membership or invitation change remains the source of truth.
pub async fn emit<DB: DatabaseAdapter>(ctx: &CollabContext<DB>, create: CreateNotification) {
    let recipient = create.user_id.clone();
    let kind = create.notification_type;

    if let Err(err) = ctx.database.create_notification(create).await {
        ctx.logger.warn(&format!(
            "failed to emit {} notification for user {}: {}",
            kind, recipient, err
        ));
    }
}

/// All notifications for the current user, newest first.
pub async fn list_notifications<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
) -> CollabResult<Vec<Notification>> {
    ctx.database.list_notifications(&actor.id).await
}

/// Mark one of the current user's notifications as read.
pub async fn mark_notification_read<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
    notification_id: &str,
) -> CollabResult<Notification> {
    ctx.database
        .mark_notification_read(notification_id, &actor.id)
        .await
}

/// Delete one of the current user's notifications.
pub async fn delete_notification<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
    notification_id: &str,
) -> CollabResult<()> {
    ctx.database
        .delete_notification(notification_id, &actor.id)
        .await
}
