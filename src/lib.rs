//! # Casa Check collaboration core
//!
//! Invitation lifecycle and collaborator-state reconciliation for the Casa
//! Check household-services app, where a contratante (hiring party) shares
//! task lists with prestadores (service providers).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use casa_check::adapters::MemoryDatabaseAdapter;
//! use casa_check::{CollabConfig, CollabContext, CreateList, CreateUser, UserRole};
//! use casa_check::{SendInvitationRequest, UserOps, ListOps, send_invitation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = CollabContext::new(CollabConfig::default(), MemoryDatabaseAdapter::new());
//!
//!     let ana = ctx
//!         .database
//!         .create_user(CreateUser::new("Ana", "ana@example.com", UserRole::Contratante))
//!         .await?;
//!     let bia = ctx
//!         .database
//!         .create_user(CreateUser::new("Bia", "bia@example.com", UserRole::Prestador))
//!         .await?;
//!     let list = ctx
//!         .database
//!         .create_list(CreateList::new("Limpeza semanal", ana.id.clone()))
//!         .await?;
//!
//!     let invitation = send_invitation(
//!         &ctx,
//!         &ana,
//!         &SendInvitationRequest {
//!             list_id: list.id,
//!             invitee_id: bia.id,
//!             message: Some("Pode me ajudar com essa lista?".into()),
//!         },
//!     )
//!     .await?;
//!
//!     println!("invitation {} is {}", invitation.id, invitation.status);
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use casa_check_core::adapters;
pub use casa_check_core::{
    CollabConfig, CollabError, CollabResult, Collaborator, CollaboratorOps, CreateCollaborator,
    CreateInvitation, CreateList, CreateNotification, CreateSession, CreateUser, DatabaseAdapter,
    DatabaseError, Invitation, InvitationOps, InvitationStatus, List, ListOps, Logger,
    MemoryDatabaseAdapter, Notification, NotificationOps, NotificationType, Session, SessionOps,
    TracingLogger, User, UserOps, UserRole, default_logger,
};

// Re-export the collaboration services
pub use casa_check_collab::{
    CollabContext, CollabStatus, CollaboratorView, InvitationView, ListSummary,
    SendInvitationRequest, UserSummary, accept_invitation, build_status_map, decline_invitation,
    delete_notification, emit, get_all_invitations, get_pending_invitations, leave_list,
    list_active_collaborators, list_notifications, mark_notification_read, remove_collaborator,
    require_session, resolve_id, resolve_list_id, send_invitation,
};
