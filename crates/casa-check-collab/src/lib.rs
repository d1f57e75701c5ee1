//! # Casa Check Collab
//!
//! Collaboration domain services for Casa Check: invitation lifecycle,
//! collaborator membership, the reconciliation view builder that drives the
//! collaborator panel, the notification emitter, and the identity resolver
//! for truncated URL identifiers.
//!
//! Operations are free async functions taking a [`CollabContext`] plus the
//! already-authenticated actor (resolve one with
//! [`context::require_session`]).

pub mod collaborator;
pub mod context;
pub mod invitation;
pub mod notify;
pub mod reconcile;
pub mod resolve;
pub mod types;

pub use collaborator::{leave_list, list_active_collaborators, remove_collaborator};
pub use context::{CollabContext, require_session};
pub use invitation::{
    accept_invitation, decline_invitation, get_all_invitations, get_pending_invitations,
    send_invitation,
};
pub use notify::{delete_notification, emit, list_notifications, mark_notification_read};
pub use reconcile::build_status_map;
pub use resolve::{resolve_id, resolve_list_id};
pub use types::{
    CollabStatus, CollaboratorView, InvitationView, ListSummary, SendInvitationRequest,
    UserSummary,
};
