//! Collaborator membership: listing, owner removal and self-service leave.

use casa_check_core::adapters::DatabaseAdapter;
use casa_check_core::error::{CollabError, CollabResult};
use casa_check_core::types::{
    CreateNotification, InvitationStatus, List, NotificationType, User,
};

use crate::context::{CollabContext, ensure_uuid};
use crate::notify;
use crate::types::CollaboratorView;

/// All active collaborators of a list, enriched with user profile summaries.
/// A missing user row leaves the summary `None` rather than dropping the
/// membership record.
pub async fn list_active_collaborators<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    list_id: &str,
) -> CollabResult<Vec<CollaboratorView>> {
    ensure_uuid(list_id, "listId")?;

    let rows = ctx.database.list_collaborators(list_id).await?;

    let mut views = Vec::with_capacity(rows.len());
    for collaborator in &rows {
        let user = ctx.database.get_user_by_id(&collaborator.user_id).await?;
        views.push(CollaboratorView::from_collaborator(
            collaborator,
            user.as_ref(),
        ));
    }

    Ok(views)
}

/// Remove a collaborator from a list. Restricted to the list owner.
pub async fn remove_collaborator<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
    list_id: &str,
    user_id: &str,
) -> CollabResult<()> {
    ensure_uuid(list_id, "listId")?;
    ensure_uuid(user_id, "userId")?;

    let list = ctx
        .database
        .get_list_by_id(list_id)
        .await?
        .ok_or_else(|| CollabError::not_found("List not found"))?;

    if list.creator_id != actor.id {
        return Err(CollabError::forbidden(
            "Only the list owner can remove collaborators",
        ));
    }

    let collaborator = ctx
        .database
        .get_collaborator(list_id, user_id)
        .await?
        .ok_or_else(|| CollabError::not_found("Collaborator not found"))?;

    ctx.database.delete_collaborator(list_id, user_id).await?;

    let removed_name = match ctx.database.get_user_by_id(user_id).await {
        Ok(Some(user)) => user.name,
        _ => "Um colaborador".to_string(),
    };

    notify::emit(
        ctx,
        departure_notification(
            &list,
            NotificationType::CollaboratorRemoved,
            "Colaborador removido",
            format!("{} foi removido da lista \"{}\"", removed_name, list.name),
            &collaborator.user_id,
        ),
    )
    .await;

    expire_stale_accepted(ctx, list_id, user_id).await;

    Ok(())
}

/// Leave a list voluntarily. Self-service variant of removal, initiated by
/// the collaborator rather than the owner; same side effects.
pub async fn leave_list<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
    list_id: &str,
) -> CollabResult<()> {
    ensure_uuid(list_id, "listId")?;

    let list = ctx
        .database
        .get_list_by_id(list_id)
        .await?
        .ok_or_else(|| CollabError::not_found("List not found"))?;

    ctx.database
        .get_collaborator(list_id, &actor.id)
        .await?
        .ok_or_else(|| CollabError::not_found("You are not a collaborator on this list"))?;

    ctx.database.delete_collaborator(list_id, &actor.id).await?;

    notify::emit(
        ctx,
        departure_notification(
            &list,
            NotificationType::CollaboratorLeft,
            "Colaborador saiu",
            format!("{} saiu da lista \"{}\"", actor.name, list.name),
            &actor.id,
        ),
    )
    .await;

    expire_stale_accepted(ctx, list_id, &actor.id).await;

    Ok(())
}

/// Best-effort expiry of accepted invitations left behind by a departure.
///
/// The removal itself already succeeded, so failures here are logged and
/// never surfaced; a stale accepted row is also cleared defensively by the
/// next `send_invitation` for the pair.
async fn expire_stale_accepted<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    list_id: &str,
    user_id: &str,
) {
    let stale = match ctx.database.list_invitations_for_list(list_id).await {
        Ok(rows) => rows,
        Err(err) => {
            ctx.logger.warn(&format!(
                "expire_stale_accepted: listing invitations for list {} failed: {}",
                list_id, err
            ));
            return;
        }
    };

    for invitation in stale
        .iter()
        .filter(|i| i.invitee_id == user_id && i.status == InvitationStatus::Accepted)
    {
        if let Err(err) = ctx
            .database
            .update_invitation_status(&invitation.id, InvitationStatus::Expired)
            .await
        {
            ctx.logger.warn(&format!(
                "expire_stale_accepted: invitation {} on list {} failed: {}",
                invitation.id, list_id, err
            ));
        }
    }
}

fn departure_notification(
    list: &List,
    kind: NotificationType,
    title: &str,
    message: String,
    departed_user_id: &str,
) -> CreateNotification {
    CreateNotification {
        user_id: list.creator_id.clone(),
        notification_type: kind,
        title: title.to_string(),
        message,
        related_id: Some(list.id.clone()),
        related_type: Some("list".to_string()),
        data: Some(serde_json::json!({ "userId": departed_user_id })),
    }
}
