//! Persistence boundary for the collaboration core.
//!
//! Each entity gets its own operation trait; [`DatabaseAdapter`] combines
//! them via a blanket impl. Service code depends on the sub-traits it
//! actually uses, backends implement all of them.

use async_trait::async_trait;

use crate::error::CollabResult;
use crate::types::{
    Collaborator, CreateCollaborator, CreateInvitation, CreateList, CreateNotification,
    CreateSession, CreateUser, Invitation, InvitationStatus, List, Notification, Session, User,
};

/// User persistence operations.
#[async_trait]
pub trait UserOps: Send + Sync {
    async fn create_user(&self, create: CreateUser) -> CollabResult<User>;
    async fn get_user_by_id(&self, id: &str) -> CollabResult<Option<User>>;
}

/// Session persistence operations.
#[async_trait]
pub trait SessionOps: Send + Sync {
    async fn create_session(&self, create: CreateSession) -> CollabResult<Session>;
    async fn get_session(&self, token: &str) -> CollabResult<Option<Session>>;
}

/// List persistence operations.
#[async_trait]
pub trait ListOps: Send + Sync {
    async fn create_list(&self, create: CreateList) -> CollabResult<List>;
    async fn get_list_by_id(&self, id: &str) -> CollabResult<Option<List>>;
    /// All canonical list identifiers, used by the identity resolver to
    /// reconstruct truncated URL-slug prefixes.
    async fn list_list_ids(&self) -> CollabResult<Vec<String>>;
}

/// Collaborator membership operations.
#[async_trait]
pub trait CollaboratorOps: Send + Sync {
    async fn create_collaborator(&self, create: CreateCollaborator) -> CollabResult<Collaborator>;
    async fn get_collaborator(
        &self,
        list_id: &str,
        user_id: &str,
    ) -> CollabResult<Option<Collaborator>>;
    async fn list_collaborators(&self, list_id: &str) -> CollabResult<Vec<Collaborator>>;
    async fn delete_collaborator(&self, list_id: &str, user_id: &str) -> CollabResult<()>;
}

/// Invitation persistence operations.
///
/// Invitations are append-only: there is no delete, only status transitions.
#[async_trait]
pub trait InvitationOps: Send + Sync {
    async fn create_invitation(&self, create: CreateInvitation) -> CollabResult<Invitation>;
    async fn get_invitation_by_id(&self, id: &str) -> CollabResult<Option<Invitation>>;
    async fn update_invitation_status(
        &self,
        id: &str,
        status: InvitationStatus,
    ) -> CollabResult<Invitation>;
    /// All invitations for a (list, invitee, inviter) triple, any status.
    async fn list_pair_invitations(
        &self,
        list_id: &str,
        invitee_id: &str,
        inviter_id: &str,
    ) -> CollabResult<Vec<Invitation>>;
    async fn list_invitations_for_list(&self, list_id: &str) -> CollabResult<Vec<Invitation>>;
    async fn list_invitations_for_invitee(
        &self,
        invitee_id: &str,
    ) -> CollabResult<Vec<Invitation>>;
    /// Atomically mark the invitation accepted and create the backing
    /// collaborator row, the stored-procedure equivalent required by the
    /// accept path. On any failure neither side effect is observed.
    async fn accept_invitation(&self, id: &str) -> CollabResult<(Invitation, Collaborator)>;
}

/// Notification persistence operations.
#[async_trait]
pub trait NotificationOps: Send + Sync {
    async fn create_notification(&self, create: CreateNotification) -> CollabResult<Notification>;
    async fn list_notifications(&self, user_id: &str) -> CollabResult<Vec<Notification>>;
    /// Set the `read` flag. `user_id` must match the owning user.
    async fn mark_notification_read(&self, id: &str, user_id: &str) -> CollabResult<Notification>;
    /// Delete the notification. `user_id` must match the owning user.
    async fn delete_notification(&self, id: &str, user_id: &str) -> CollabResult<()>;
}

/// Database adapter trait for persistence.
///
/// Combines all entity-specific operation traits. Any type that implements
/// all sub-traits automatically implements `DatabaseAdapter` via the blanket
/// impl.
pub trait DatabaseAdapter:
    UserOps + SessionOps + ListOps + CollaboratorOps + InvitationOps + NotificationOps
{
}

impl<T> DatabaseAdapter for T where
    T: UserOps + SessionOps + ListOps + CollaboratorOps + InvitationOps + NotificationOps
{
}
