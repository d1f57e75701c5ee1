//! Invitation lifecycle: send, accept, decline, and the invitee-facing
//! inbox queries.
//!
//! Invitations move `pending -> accepted | declined | expired` and are never
//! deleted; the send path is the defensive re-check that keeps at most one
//! live pending invitation per (list, invitee, inviter) triple and clears
//! "ghost" accepted invitations whose membership was later revoked.

use validator::Validate;

use casa_check_core::adapters::DatabaseAdapter;
use casa_check_core::error::{CollabError, CollabResult};
use casa_check_core::types::{
    Collaborator, CreateInvitation, CreateNotification, Invitation, InvitationStatus, List,
    NotificationType, User,
};

use crate::context::{CollabContext, ensure_uuid};
use crate::notify;
use crate::types::{InvitationView, ListSummary, SendInvitationRequest, UserSummary};

/// Send a collaboration invitation from `actor` to the requested invitee.
///
/// Before inserting, every invitation for the triple with status in
/// {pending, accepted} is examined:
/// - pending and unexpired fails with [`CollabError::DuplicateInvitation`];
/// - pending but past its expiry is transitioned to expired and skipped;
/// - accepted with the membership row still present fails with
///   [`CollabError::AlreadyAccepted`];
/// - accepted with the membership row gone (the user left or was removed)
///   is transitioned to expired, clearing the way for a re-invite.
pub async fn send_invitation<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
    req: &SendInvitationRequest,
) -> CollabResult<Invitation> {
    req.validate()?;
    ensure_uuid(&req.list_id, "listId")?;
    ensure_uuid(&req.invitee_id, "inviteeId")?;

    let list = ctx
        .database
        .get_list_by_id(&req.list_id)
        .await?
        .ok_or_else(|| CollabError::not_found("List not found"))?;

    let invitee = ctx
        .database
        .get_user_by_id(&req.invitee_id)
        .await?
        .ok_or_else(|| CollabError::not_found("User not found"))?;

    let existing = ctx
        .database
        .list_pair_invitations(&req.list_id, &req.invitee_id, &actor.id)
        .await?;

    for invitation in &existing {
        match invitation.status {
            InvitationStatus::Pending => {
                if !invitation.is_expired() {
                    return Err(CollabError::DuplicateInvitation);
                }
                ctx.database
                    .update_invitation_status(&invitation.id, InvitationStatus::Expired)
                    .await?;
            }
            InvitationStatus::Accepted => {
                let membership = ctx
                    .database
                    .get_collaborator(&req.list_id, &req.invitee_id)
                    .await?;

                if membership.is_some() {
                    return Err(CollabError::AlreadyAccepted);
                }

                // Ghost accepted invitation: membership was revoked after
                // acceptance. Expire it so the pair can be re-invited.
                ctx.database
                    .update_invitation_status(&invitation.id, InvitationStatus::Expired)
                    .await?;
            }
            InvitationStatus::Declined | InvitationStatus::Expired => {}
        }
    }

    let expires_at = chrono::Utc::now() + ctx.config.invitation_ttl();

    let invitation = ctx
        .database
        .create_invitation(CreateInvitation {
            list_id: req.list_id.clone(),
            inviter_id: actor.id.clone(),
            invitee_id: req.invitee_id.clone(),
            message: req.message.clone(),
            expires_at,
        })
        .await?;

    notify::emit(
        ctx,
        invitation_notification(
            &invitee.id,
            NotificationType::InviteReceived,
            "Novo convite",
            format!(
                "{} convidou você para colaborar na lista \"{}\"",
                actor.name, list.name
            ),
            &invitation,
        ),
    )
    .await;

    Ok(invitation)
}

/// Accept an invitation. Restricted to the invitee.
///
/// The status transition and the collaborator insert happen in a single
/// adapter-level atomic operation: success guarantees the membership row
/// exists, failure leaves neither side effect.
pub async fn accept_invitation<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
    invitation_id: &str,
) -> CollabResult<(Invitation, Collaborator)> {
    let invitation = ctx
        .database
        .get_invitation_by_id(invitation_id)
        .await?
        .ok_or_else(|| CollabError::not_found("Invitation not found"))?;

    if invitation.invitee_id != actor.id {
        return Err(CollabError::forbidden("This invitation is not for you"));
    }

    if !invitation.is_pending() {
        return Err(CollabError::conflict(format!(
            "Invitation is already {}",
            invitation.status
        )));
    }

    if invitation.is_expired() {
        if let Err(err) = ctx
            .database
            .update_invitation_status(invitation_id, InvitationStatus::Expired)
            .await
        {
            ctx.logger.warn(&format!(
                "failed to expire stale invitation {}: {}",
                invitation_id, err
            ));
        }
        return Err(CollabError::conflict("Invitation has expired"));
    }

    let (invitation, collaborator) = ctx.database.accept_invitation(invitation_id).await?;

    notify::emit(
        ctx,
        invitation_notification(
            &invitation.inviter_id,
            NotificationType::InviteAccepted,
            "Convite aceito",
            format!("{} aceitou seu convite", actor.name),
            &invitation,
        ),
    )
    .await;

    Ok((invitation, collaborator))
}

/// Decline an invitation. Restricted to the invitee; no collaborator side
/// effect, and a later re-invite for the same pair is allowed.
pub async fn decline_invitation<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
    invitation_id: &str,
) -> CollabResult<Invitation> {
    let invitation = ctx
        .database
        .get_invitation_by_id(invitation_id)
        .await?
        .ok_or_else(|| CollabError::not_found("Invitation not found"))?;

    if invitation.invitee_id != actor.id {
        return Err(CollabError::forbidden("This invitation is not for you"));
    }

    if !invitation.is_pending() {
        return Err(CollabError::conflict(format!(
            "Invitation is already {}",
            invitation.status
        )));
    }

    let invitation = ctx
        .database
        .update_invitation_status(invitation_id, InvitationStatus::Declined)
        .await?;

    notify::emit(
        ctx,
        invitation_notification(
            &invitation.inviter_id,
            NotificationType::InviteDeclined,
            "Convite recusado",
            format!("{} recusou seu convite", actor.name),
            &invitation,
        ),
    )
    .await;

    Ok(invitation)
}

/// Pending, unexpired invitations where the current user is the invitee,
/// enriched with inviter and list summaries.
pub async fn get_pending_invitations<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
) -> CollabResult<Vec<InvitationView>> {
    let mut rows: Vec<Invitation> = ctx
        .database
        .list_invitations_for_invitee(&actor.id)
        .await?
        .into_iter()
        .filter(|i| i.is_pending() && !i.is_expired())
        .collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    enrich_all(ctx, rows).await
}

/// Full invitation history for the current user (any status), newest first.
pub async fn get_all_invitations<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    actor: &User,
) -> CollabResult<Vec<InvitationView>> {
    let mut rows = ctx.database.list_invitations_for_invitee(&actor.id).await?;
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    enrich_all(ctx, rows).await
}

async fn enrich_all<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    rows: Vec<Invitation>,
) -> CollabResult<Vec<InvitationView>> {
    let mut views = Vec::with_capacity(rows.len());
    for invitation in rows {
        views.push(enrich(ctx, invitation).await);
    }
    Ok(views)
}

/// Denormalize inviter and list data onto an invitation. Missing rows (and
/// failed secondary lookups) degrade to `None` instead of dropping the
/// record or failing the batch.
async fn enrich<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    invitation: Invitation,
) -> InvitationView {
    let inviter = lookup_user(ctx, &invitation.inviter_id).await;
    let list = lookup_list(ctx, &invitation.list_id).await;

    InvitationView {
        invitation,
        inviter: inviter.as_ref().map(UserSummary::from_user),
        list: list.as_ref().map(ListSummary::from_list),
    }
}

async fn lookup_user<DB: DatabaseAdapter>(ctx: &CollabContext<DB>, id: &str) -> Option<User> {
    match ctx.database.get_user_by_id(id).await {
        Ok(user) => user,
        Err(err) => {
            ctx.logger
                .warn(&format!("invitation enrichment: user lookup {} failed: {}", id, err));
            None
        }
    }
}

async fn lookup_list<DB: DatabaseAdapter>(ctx: &CollabContext<DB>, id: &str) -> Option<List> {
    match ctx.database.get_list_by_id(id).await {
        Ok(list) => list,
        Err(err) => {
            ctx.logger
                .warn(&format!("invitation enrichment: list lookup {} failed: {}", id, err));
            None
        }
    }
}

fn invitation_notification(
    recipient: &str,
    kind: NotificationType,
    title: &str,
    message: String,
    invitation: &Invitation,
) -> CreateNotification {
    CreateNotification {
        user_id: recipient.to_string(),
        notification_type: kind,
        title: title.to_string(),
        message,
        related_id: Some(invitation.id.clone()),
        related_type: Some("invitation".to_string()),
        data: Some(serde_json::json!({
            "listId": invitation.list_id,
            "inviterId": invitation.inviter_id,
        })),
    }
}
