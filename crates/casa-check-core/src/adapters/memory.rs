use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::error::{CollabError, CollabResult};
use crate::types::{
    Collaborator, CreateCollaborator, CreateInvitation, CreateList, CreateNotification,
    CreateSession, CreateUser, Invitation, InvitationStatus, List, Notification, Session, User,
};

use super::{CollaboratorOps, InvitationOps, ListOps, NotificationOps, SessionOps, UserOps};

/// In-memory database adapter for testing and development.
///
/// Tables are plain `HashMap`s behind mutexes; sessions are keyed by token,
/// everything else by id. [`InvitationOps::accept_invitation`] holds the
/// invitation and collaborator locks together for the whole transition, so
/// the accepted status and the membership row appear (or fail) as one unit.
#[derive(Default)]
pub struct MemoryDatabaseAdapter {
    users: Arc<Mutex<HashMap<String, User>>>,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    lists: Arc<Mutex<HashMap<String, List>>>,
    collaborators: Arc<Mutex<HashMap<String, Collaborator>>>,
    invitations: Arc<Mutex<HashMap<String, Invitation>>>,
    notifications: Arc<Mutex<HashMap<String, Notification>>>,
}

impl MemoryDatabaseAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserOps for MemoryDatabaseAdapter {
    async fn create_user(&self, create: CreateUser) -> CollabResult<User> {
        let mut users = self.users.lock().unwrap();

        let id = create.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());

        if users.values().any(|u| u.email == create.email) {
            return Err(CollabError::conflict("Email already exists"));
        }

        let now = Utc::now();
        let user = User {
            id: id.clone(),
            name: create.name,
            email: create.email,
            role: create.role,
            image: create.image,
            created_at: now,
            updated_at: now,
        };

        users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: &str) -> CollabResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.get(id).cloned())
    }
}

#[async_trait]
impl SessionOps for MemoryDatabaseAdapter {
    async fn create_session(&self, create: CreateSession) -> CollabResult<Session> {
        let mut sessions = self.sessions.lock().unwrap();

        let id = Uuid::new_v4().to_string();
        let token = format!("session_{}", Uuid::new_v4());
        let session = Session {
            id,
            token: token.clone(),
            user_id: create.user_id,
            expires_at: create.expires_at,
            created_at: Utc::now(),
        };

        sessions.insert(token, session.clone());
        Ok(session)
    }

    async fn get_session(&self, token: &str) -> CollabResult<Option<Session>> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions.get(token).cloned())
    }
}

#[async_trait]
impl ListOps for MemoryDatabaseAdapter {
    async fn create_list(&self, create: CreateList) -> CollabResult<List> {
        let mut lists = self.lists.lock().unwrap();

        let id = create.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
        let now = Utc::now();
        let list = List {
            id: id.clone(),
            name: create.name,
            description: create.description,
            creator_id: create.creator_id,
            created_at: now,
            updated_at: now,
        };

        lists.insert(id, list.clone());
        Ok(list)
    }

    async fn get_list_by_id(&self, id: &str) -> CollabResult<Option<List>> {
        let lists = self.lists.lock().unwrap();
        Ok(lists.get(id).cloned())
    }

    async fn list_list_ids(&self) -> CollabResult<Vec<String>> {
        let lists = self.lists.lock().unwrap();
        Ok(lists.keys().cloned().collect())
    }
}

#[async_trait]
impl CollaboratorOps for MemoryDatabaseAdapter {
    async fn create_collaborator(&self, create: CreateCollaborator) -> CollabResult<Collaborator> {
        let mut collaborators = self.collaborators.lock().unwrap();

        let exists = collaborators
            .values()
            .any(|c| c.list_id == create.list_id && c.user_id == create.user_id);

        if exists {
            return Err(CollabError::conflict(
                "User is already a collaborator on this list",
            ));
        }

        let id = Uuid::new_v4().to_string();
        let collaborator = Collaborator {
            id: id.clone(),
            list_id: create.list_id,
            user_id: create.user_id,
            created_at: Utc::now(),
        };

        collaborators.insert(id, collaborator.clone());
        Ok(collaborator)
    }

    async fn get_collaborator(
        &self,
        list_id: &str,
        user_id: &str,
    ) -> CollabResult<Option<Collaborator>> {
        let collaborators = self.collaborators.lock().unwrap();
        Ok(collaborators
            .values()
            .find(|c| c.list_id == list_id && c.user_id == user_id)
            .cloned())
    }

    async fn list_collaborators(&self, list_id: &str) -> CollabResult<Vec<Collaborator>> {
        let collaborators = self.collaborators.lock().unwrap();
        Ok(collaborators
            .values()
            .filter(|c| c.list_id == list_id)
            .cloned()
            .collect())
    }

    async fn delete_collaborator(&self, list_id: &str, user_id: &str) -> CollabResult<()> {
        let mut collaborators = self.collaborators.lock().unwrap();
        collaborators.retain(|_, c| !(c.list_id == list_id && c.user_id == user_id));
        Ok(())
    }
}

#[async_trait]
impl InvitationOps for MemoryDatabaseAdapter {
    async fn create_invitation(&self, create: CreateInvitation) -> CollabResult<Invitation> {
        let mut invitations = self.invitations.lock().unwrap();

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let invitation = Invitation {
            id: id.clone(),
            list_id: create.list_id,
            inviter_id: create.inviter_id,
            invitee_id: create.invitee_id,
            message: create.message,
            status: InvitationStatus::Pending,
            created_at: now,
            updated_at: now,
            expires_at: create.expires_at,
        };

        invitations.insert(id, invitation.clone());
        Ok(invitation)
    }

    async fn get_invitation_by_id(&self, id: &str) -> CollabResult<Option<Invitation>> {
        let invitations = self.invitations.lock().unwrap();
        Ok(invitations.get(id).cloned())
    }

    async fn update_invitation_status(
        &self,
        id: &str,
        status: InvitationStatus,
    ) -> CollabResult<Invitation> {
        let mut invitations = self.invitations.lock().unwrap();
        let invitation = invitations
            .get_mut(id)
            .ok_or_else(|| CollabError::not_found("Invitation not found"))?;
        invitation.status = status;
        invitation.updated_at = Utc::now();
        Ok(invitation.clone())
    }

    async fn list_pair_invitations(
        &self,
        list_id: &str,
        invitee_id: &str,
        inviter_id: &str,
    ) -> CollabResult<Vec<Invitation>> {
        let invitations = self.invitations.lock().unwrap();
        Ok(invitations
            .values()
            .filter(|i| {
                i.list_id == list_id && i.invitee_id == invitee_id && i.inviter_id == inviter_id
            })
            .cloned()
            .collect())
    }

    async fn list_invitations_for_list(&self, list_id: &str) -> CollabResult<Vec<Invitation>> {
        let invitations = self.invitations.lock().unwrap();
        Ok(invitations
            .values()
            .filter(|i| i.list_id == list_id)
            .cloned()
            .collect())
    }

    async fn list_invitations_for_invitee(
        &self,
        invitee_id: &str,
    ) -> CollabResult<Vec<Invitation>> {
        let invitations = self.invitations.lock().unwrap();
        Ok(invitations
            .values()
            .filter(|i| i.invitee_id == invitee_id)
            .cloned()
            .collect())
    }

    async fn accept_invitation(&self, id: &str) -> CollabResult<(Invitation, Collaborator)> {
        // Both locks held for the whole transition: all-or-nothing.
        let mut invitations = self.invitations.lock().unwrap();
        let mut collaborators = self.collaborators.lock().unwrap();

        let invitation = invitations
            .get_mut(id)
            .ok_or_else(|| CollabError::not_found("Invitation not found"))?;

        if invitation.status != InvitationStatus::Pending {
            return Err(CollabError::conflict(format!(
                "Invitation is already {}",
                invitation.status
            )));
        }

        let exists = collaborators
            .values()
            .any(|c| c.list_id == invitation.list_id && c.user_id == invitation.invitee_id);

        if exists {
            return Err(CollabError::conflict(
                "User is already a collaborator on this list",
            ));
        }

        let now = Utc::now();
        let collaborator = Collaborator {
            id: Uuid::new_v4().to_string(),
            list_id: invitation.list_id.clone(),
            user_id: invitation.invitee_id.clone(),
            created_at: now,
        };
        collaborators.insert(collaborator.id.clone(), collaborator.clone());

        invitation.status = InvitationStatus::Accepted;
        invitation.updated_at = now;

        Ok((invitation.clone(), collaborator))
    }
}

#[async_trait]
impl NotificationOps for MemoryDatabaseAdapter {
    async fn create_notification(&self, create: CreateNotification) -> CollabResult<Notification> {
        let mut notifications = self.notifications.lock().unwrap();

        let id = Uuid::new_v4().to_string();
        let notification = Notification {
            id: id.clone(),
            user_id: create.user_id,
            notification_type: create.notification_type,
            title: create.title,
            message: create.message,
            related_id: create.related_id,
            related_type: create.related_type,
            read: false,
            data: create.data,
            created_at: Utc::now(),
        };

        notifications.insert(id, notification.clone());
        Ok(notification)
    }

    async fn list_notifications(&self, user_id: &str) -> CollabResult<Vec<Notification>> {
        let notifications = self.notifications.lock().unwrap();
        let mut rows: Vec<Notification> = notifications
            .values()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn mark_notification_read(&self, id: &str, user_id: &str) -> CollabResult<Notification> {
        let mut notifications = self.notifications.lock().unwrap();
        let notification = notifications
            .get_mut(id)
            .filter(|n| n.user_id == user_id)
            .ok_or_else(|| CollabError::not_found("Notification not found"))?;
        notification.read = true;
        Ok(notification.clone())
    }

    async fn delete_notification(&self, id: &str, user_id: &str) -> CollabResult<()> {
        let mut notifications = self.notifications.lock().unwrap();
        match notifications.get(id) {
            Some(n) if n.user_id == user_id => {
                notifications.remove(id);
                Ok(())
            }
            _ => Err(CollabError::not_found("Notification not found")),
        }
    }
}
