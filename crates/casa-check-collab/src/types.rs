use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use casa_check_core::types::{Collaborator, Invitation, List, User};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendInvitationRequest {
    #[serde(rename = "listId")]
    pub list_id: String,
    #[serde(rename = "inviteeId")]
    pub invitee_id: String,
    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    pub message: Option<String>,
}

/// Minimal user info projected into enriched responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

impl UserSummary {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
        }
    }
}

/// Minimal list info projected into enriched responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl ListSummary {
    pub fn from_list(list: &List) -> Self {
        Self {
            id: list.id.clone(),
            name: list.name.clone(),
            description: list.description.clone(),
        }
    }
}

/// Invitation enriched with denormalized inviter and list summaries.
///
/// Enrichment degrades gracefully: a missing referenced row leaves the
/// corresponding field `None` instead of dropping the record.
#[derive(Debug, Clone, Serialize)]
pub struct InvitationView {
    #[serde(flatten)]
    pub invitation: Invitation,
    pub inviter: Option<UserSummary>,
    pub list: Option<ListSummary>,
}

/// Collaborator enriched with user profile summary.
#[derive(Debug, Clone, Serialize)]
pub struct CollaboratorView {
    pub id: String,
    #[serde(rename = "listId")]
    pub list_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub user: Option<UserSummary>,
}

impl CollaboratorView {
    pub fn from_collaborator(collaborator: &Collaborator, user: Option<&User>) -> Self {
        Self {
            id: collaborator.id.clone(),
            list_id: collaborator.list_id.clone(),
            user_id: collaborator.user_id.clone(),
            created_at: collaborator.created_at,
            user: user.map(UserSummary::from_user),
        }
    }
}

/// Effective per-user collaboration status on a list, as shown by the
/// collaborator panel. Users absent from the status map are implicitly none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollabStatus {
    Active,
    Pending,
}
