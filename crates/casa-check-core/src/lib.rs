//! # Casa Check Core
//!
//! Core abstractions for the Casa Check collaboration subsystem.
//! Contains entities, typed errors, configuration, logging, and the
//! persistence boundary.

pub mod adapters;
pub mod config;
pub mod error;
pub mod logger;
pub mod types;

// Re-export commonly used items
pub use adapters::{
    CollaboratorOps, DatabaseAdapter, InvitationOps, ListOps, MemoryDatabaseAdapter,
    NotificationOps, SessionOps, UserOps,
};
pub use config::CollabConfig;
pub use error::{CollabError, CollabResult, DatabaseError};
pub use logger::{Logger, TracingLogger, default_logger};
pub use types::{
    Collaborator, CreateCollaborator, CreateInvitation, CreateList, CreateNotification,
    CreateSession, CreateUser, Invitation, InvitationStatus, List, Notification, NotificationType,
    Session, User, UserRole,
};
