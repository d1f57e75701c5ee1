use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use casa_check_core::adapters::DatabaseAdapter;
use casa_check_core::config::CollabConfig;
use casa_check_core::error::{CollabError, CollabResult};
use casa_check_core::logger::{Logger, default_logger};
use casa_check_core::types::{Session, User};

/// Context passed to every service operation.
pub struct CollabContext<DB: DatabaseAdapter> {
    pub config: Arc<CollabConfig>,
    pub database: Arc<DB>,
    pub logger: Arc<dyn Logger>,
}

impl<DB: DatabaseAdapter> CollabContext<DB> {
    pub fn new(config: CollabConfig, database: DB) -> Self {
        Self {
            config: Arc::new(config),
            database: Arc::new(database),
            logger: default_logger(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }
}

/// Resolve the current user from a session token.
///
/// Every invitation and collaborator operation requires an authenticated
/// actor; a missing or expired session yields `Unauthenticated`.
pub async fn require_session<DB: DatabaseAdapter>(
    ctx: &CollabContext<DB>,
    token: &str,
) -> CollabResult<(User, Session)> {
    if let Some(session) = ctx.database.get_session(token).await?
        && session.expires_at > Utc::now()
        && let Some(user) = ctx.database.get_user_by_id(&session.user_id).await?
    {
        return Ok((user, session));
    }

    Err(CollabError::Unauthenticated)
}

/// Syntactic identifier check, performed before any remote call.
pub(crate) fn ensure_uuid(value: &str, field: &str) -> CollabResult<()> {
    Uuid::try_parse(value)
        .map(|_| ())
        .map_err(|_| CollabError::validation(format!("{} is not a valid identifier", field)))
}
