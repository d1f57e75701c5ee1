pub mod database;
pub mod memory;

pub use database::{
    CollaboratorOps, DatabaseAdapter, InvitationOps, ListOps, NotificationOps, SessionOps, UserOps,
};
pub use memory::MemoryDatabaseAdapter;
