use thiserror::Error;

/// Collaboration core error types.
///
/// Every business-rule violation is resolved at the service boundary and
/// returned as one of these typed variants; callers branch on the variant to
/// pick the user-visible message (e.g. "already invited" vs "already a
/// collaborator"). Each variant maps to an HTTP status code via
/// [`CollabError::status_code`].
#[derive(Error, Debug)]
pub enum CollabError {
    // --- 400 Bad Request ---
    #[error("Validation error: {0}")]
    Validation(String),

    // --- 401 Unauthorized ---
    #[error("Authentication required")]
    Unauthenticated,

    // --- 403 Forbidden ---
    #[error("{0}")]
    Forbidden(String),

    // --- 404 Not Found ---
    #[error("{0}")]
    NotFound(String),

    // --- 409 Conflict ---
    /// A pending, unexpired invitation already exists for this
    /// (list, invitee, inviter) triple.
    #[error("An invitation for this user is already pending")]
    DuplicateInvitation,

    /// The invitee already accepted an earlier invitation and is still an
    /// active collaborator. Distinct from [`CollabError::DuplicateInvitation`]
    /// so the UI can render a more specific message and stop resending.
    #[error("User is already a collaborator on this list")]
    AlreadyAccepted,

    #[error("{0}")]
    Conflict(String),

    // --- 500 Internal Server Error ---
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CollabError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Unauthenticated => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::DuplicateInvitation | Self::AlreadyAccepted | Self::Conflict(_) => 409,
            Self::Database(_) | Self::Serialization(_) => 500,
        }
    }

    /// User-facing message. Internal errors (500) use a generic message to
    /// avoid leaking details.
    pub fn user_message(&self) -> String {
        match self.status_code() {
            500 => "Something went wrong, please try again".to_string(),
            _ => self.to_string(),
        }
    }

    // --- Constructors ---

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

impl From<validator::ValidationErrors> for CollabError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let detail: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field))
                })
            })
            .collect();
        Self::Validation(detail.join("; "))
    }
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

pub type CollabResult<T> = Result<T, CollabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_and_already_accepted_are_distinct() {
        assert_ne!(
            CollabError::DuplicateInvitation.to_string(),
            CollabError::AlreadyAccepted.to_string()
        );
        assert_eq!(CollabError::DuplicateInvitation.status_code(), 409);
        assert_eq!(CollabError::AlreadyAccepted.status_code(), 409);
    }

    #[test]
    fn internal_errors_use_generic_user_message() {
        let err = CollabError::Database(DatabaseError::Query("secret detail".into()));
        assert!(!err.user_message().contains("secret detail"));
    }
}
