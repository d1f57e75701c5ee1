//! Reconciliation view builder.
//!
//! Merges active memberships and pending invitations into one per-user
//! status for a list's collaborator panel (e.g. to disable "invite"
//! buttons). Pure read over two independent queries; rebuilt on every
//! render, no caching.

use std::collections::HashMap;

use casa_check_core::adapters::DatabaseAdapter;
use casa_check_core::error::CollabResult;

use crate::context::{CollabContext, ensure_uuid};
use crate::types::CollabStatus;

/// Effective collaboration status per user for a list.
///
/// Active membership takes precedence: a user with a collaborator row is
/// never downgraded to pending by a stray pending invitation. Users absent
/// from the map have no relationship with the list.
pub async fn build_status_map<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    list_id: &str,
) -> CollabResult<HashMap<String, CollabStatus>> {
    ensure_uuid(list_id, "listId")?;

    let mut statuses = HashMap::new();

    for collaborator in ctx.database.list_collaborators(list_id).await? {
        statuses.insert(collaborator.user_id, CollabStatus::Active);
    }

    for invitation in ctx.database.list_invitations_for_list(list_id).await? {
        if invitation.is_pending() && !invitation.is_expired() {
            statuses
                .entry(invitation.invitee_id)
                .or_insert(CollabStatus::Pending);
        }
    }

    Ok(statuses)
}
