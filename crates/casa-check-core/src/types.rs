//! Core entity and payload types for the Casa Check collaboration core.
//!
//! Field names serialize in camelCase to match the Casa Check API surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user plays in the household-services marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Hiring party, owns lists and invites providers.
    Contratante,
    /// Service provider, collaborates on lists they are invited to.
    Prestador,
}

/// Core user type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub image: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Authenticated session. Absence of a resolvable session yields
/// [`CollabError::Unauthenticated`](crate::error::CollabError::Unauthenticated)
/// in every service operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A household-service task list. Ownership (`creator_id`) is distinct from
/// collaboration membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "creatorId")]
    pub creator_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Active membership of a user on a list's task board.
///
/// A row exists if and only if the user currently has access to collaborate
/// on the list. Created exactly when an invitation is accepted, deleted when
/// the user leaves or is removed by the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: String,
    #[serde(rename = "listId")]
    pub list_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
    Expired,
}

impl From<String> for InvitationStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "accepted" => Self::Accepted,
            "declined" => Self::Declined,
            "expired" => Self::Expired,
            _ => Self::Pending,
        }
    }
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Declined => write!(f, "declined"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// An offer of collaboration on a list, extended by `inviter_id` to
/// `invitee_id`.
///
/// Invitations are an append-only audit trail: rows are never deleted, only
/// transitioned between statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    pub id: String,
    #[serde(rename = "listId")]
    pub list_id: String,
    #[serde(rename = "inviterId")]
    pub inviter_id: String,
    #[serde(rename = "inviteeId")]
    pub invitee_id: String,
    pub message: Option<String>,
    pub status: InvitationStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}

impl Invitation {
    /// Check if the invitation is still pending.
    pub fn is_pending(&self) -> bool {
        self.status == InvitationStatus::Pending
    }

    /// Check if the invitation has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    InviteReceived,
    InviteAccepted,
    InviteDeclined,
    CollaboratorLeft,
    CollaboratorRemoved,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InviteReceived => "invite_received",
            Self::InviteAccepted => "invite_accepted",
            Self::InviteDeclined => "invite_declined",
            Self::CollaboratorLeft => "collaborator_left",
            Self::CollaboratorRemoved => "collaborator_removed",
        };
        f.write_str(s)
    }
}

/// User-facing event record. Created by the notification emitter; after
/// creation only the owning user mutates it (mark read / delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(rename = "relatedId")]
    pub related_id: Option<String>,
    #[serde(rename = "relatedType")]
    pub related_type: Option<String>,
    pub read: bool,
    pub data: Option<serde_json::Value>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

// ─── Creation payloads ──────────────────────────────────────────────────

/// User creation data.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub image: Option<String>,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            name: name.into(),
            email: email.into(),
            role,
            image: None,
        }
    }
}

/// Session creation data.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

/// List creation data.
#[derive(Debug, Clone)]
pub struct CreateList {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: String,
}

impl CreateList {
    pub fn new(name: impl Into<String>, creator_id: impl Into<String>) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            name: name.into(),
            description: None,
            creator_id: creator_id.into(),
        }
    }
}

/// Collaborator creation data.
#[derive(Debug, Clone)]
pub struct CreateCollaborator {
    pub list_id: String,
    pub user_id: String,
}

/// Invitation creation data.
#[derive(Debug, Clone)]
pub struct CreateInvitation {
    pub list_id: String,
    pub inviter_id: String,
    pub invitee_id: String,
    pub message: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// Notification creation data.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: String,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub related_id: Option<String>,
    pub related_type: Option<String>,
    pub data: Option<serde_json::Value>,
}
