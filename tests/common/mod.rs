//! Shared test harness for the Casa Check collaboration core.
//!
//! Provides:
//! - [`TestEnv`]: a context over the in-memory adapter pre-seeded with a
//!   list owner (contratante), a provider (prestador) and one list.
//! - [`unique_email`]: atomic counter-based email generator to avoid
//!   hard-coded test emails.
//! - [`FailingNotifications`]: adapter wrapper whose notification writes
//!   always fail, for exercising the fire-and-forget policy.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use casa_check::adapters::MemoryDatabaseAdapter;
use casa_check::{
    CollabConfig, CollabContext, Collaborator, CollaboratorOps, CreateCollaborator,
    CreateInvitation, CreateList, CreateNotification, CreateSession, CreateUser, DatabaseError,
    CollabResult, Invitation, InvitationOps, InvitationStatus, List, ListOps, Notification,
    NotificationOps, Session, SessionOps, User, UserOps, UserRole,
};

static EMAIL_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique email address for testing, avoiding hard-coded collisions.
#[allow(dead_code)]
pub fn unique_email(prefix: &str) -> String {
    let n = EMAIL_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{n}@test.com")
}

pub struct TestEnv {
    pub ctx: CollabContext<MemoryDatabaseAdapter>,
    pub owner: User,
    pub provider: User,
    pub list: List,
}

/// Context with one contratante, one prestador and a list owned by the
/// contratante.
pub async fn setup() -> TestEnv {
    let ctx = CollabContext::new(CollabConfig::default(), MemoryDatabaseAdapter::new());

    let owner = ctx
        .database
        .create_user(CreateUser::new(
            "Ana",
            unique_email("ana"),
            UserRole::Contratante,
        ))
        .await
        .unwrap();
    let provider = ctx
        .database
        .create_user(CreateUser::new(
            "Bia",
            unique_email("bia"),
            UserRole::Prestador,
        ))
        .await
        .unwrap();
    let list = ctx
        .database
        .create_list(CreateList::new("Limpeza semanal", owner.id.clone()))
        .await
        .unwrap();

    TestEnv {
        ctx,
        owner,
        provider,
        list,
    }
}

#[allow(dead_code)]
pub async fn add_user(env: &TestEnv, name: &str, role: UserRole) -> User {
    env.ctx
        .database
        .create_user(CreateUser::new(name, unique_email(name), role))
        .await
        .unwrap()
}

/// Adapter wrapper whose notification writes always fail. Everything else
/// delegates to the in-memory adapter.
pub struct FailingNotifications(pub MemoryDatabaseAdapter);

#[async_trait]
impl UserOps for FailingNotifications {
    async fn create_user(&self, create: CreateUser) -> CollabResult<User> {
        self.0.create_user(create).await
    }

    async fn get_user_by_id(&self, id: &str) -> CollabResult<Option<User>> {
        self.0.get_user_by_id(id).await
    }
}

#[async_trait]
impl SessionOps for FailingNotifications {
    async fn create_session(&self, create: CreateSession) -> CollabResult<Session> {
        self.0.create_session(create).await
    }

    async fn get_session(&self, token: &str) -> CollabResult<Option<Session>> {
        self.0.get_session(token).await
    }
}

#[async_trait]
impl ListOps for FailingNotifications {
    async fn create_list(&self, create: CreateList) -> CollabResult<List> {
        self.0.create_list(create).await
    }

    async fn get_list_by_id(&self, id: &str) -> CollabResult<Option<List>> {
        self.0.get_list_by_id(id).await
    }

    async fn list_list_ids(&self) -> CollabResult<Vec<String>> {
        self.0.list_list_ids().await
    }
}

#[async_trait]
impl CollaboratorOps for FailingNotifications {
    async fn create_collaborator(&self, create: CreateCollaborator) -> CollabResult<Collaborator> {
        self.0.create_collaborator(create).await
    }

    async fn get_collaborator(
        &self,
        list_id: &str,
        user_id: &str,
    ) -> CollabResult<Option<Collaborator>> {
        self.0.get_collaborator(list_id, user_id).await
    }

    async fn list_collaborators(&self, list_id: &str) -> CollabResult<Vec<Collaborator>> {
        self.0.list_collaborators(list_id).await
    }

    async fn delete_collaborator(&self, list_id: &str, user_id: &str) -> CollabResult<()> {
        self.0.delete_collaborator(list_id, user_id).await
    }
}

#[async_trait]
impl InvitationOps for FailingNotifications {
    async fn create_invitation(&self, create: CreateInvitation) -> CollabResult<Invitation> {
        self.0.create_invitation(create).await
    }

    async fn get_invitation_by_id(&self, id: &str) -> CollabResult<Option<Invitation>> {
        self.0.get_invitation_by_id(id).await
    }

    async fn update_invitation_status(
        &self,
        id: &str,
        status: InvitationStatus,
    ) -> CollabResult<Invitation> {
        self.0.update_invitation_status(id, status).await
    }

    async fn list_pair_invitations(
        &self,
        list_id: &str,
        invitee_id: &str,
        inviter_id: &str,
    ) -> CollabResult<Vec<Invitation>> {
        self.0
            .list_pair_invitations(list_id, invitee_id, inviter_id)
            .await
    }

    async fn list_invitations_for_list(&self, list_id: &str) -> CollabResult<Vec<Invitation>> {
        self.0.list_invitations_for_list(list_id).await
    }

    async fn list_invitations_for_invitee(
        &self,
        invitee_id: &str,
    ) -> CollabResult<Vec<Invitation>> {
        self.0.list_invitations_for_invitee(invitee_id).await
    }

    async fn accept_invitation(&self, id: &str) -> CollabResult<(Invitation, Collaborator)> {
        self.0.accept_invitation(id).await
    }
}

#[async_trait]
impl NotificationOps for FailingNotifications {
    async fn create_notification(&self, _create: CreateNotification) -> CollabResult<Notification> {
        Err(DatabaseError::Query("notifications table unavailable".into()).into())
    }

    async fn list_notifications(&self, user_id: &str) -> CollabResult<Vec<Notification>> {
        self.0.list_notifications(user_id).await
    }

    async fn mark_notification_read(&self, id: &str, user_id: &str) -> CollabResult<Notification> {
        self.0.mark_notification_read(id, user_id).await
    }

    async fn delete_notification(&self, id: &str, user_id: &str) -> CollabResult<()> {
        self.0.delete_notification(id, user_id).await
    }
}

/// Session expiry far enough in the future for any test.
#[allow(dead_code)]
pub fn far_future() -> DateTime<Utc> {
    Utc::now() + chrono::Duration::hours(24)
}
