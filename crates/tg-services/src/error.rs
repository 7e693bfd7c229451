//! Role service errors

use thiserror::Error;
use tg_core::error::TgError;
use tg_db::RepositoryError;
use tg_events::EventError;

/// Raised when an admin role's permissions are about to be edited
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NonEditableRoleError {
    message: String,
}

impl NonEditableRoleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for NonEditableRoleError {
    fn default() -> Self {
        Self::new("Cannot edit permissions in an admin role")
    }
}

#[derive(Debug, Error)]
pub enum RoleServiceError {
    #[error(transparent)]
    NonEditableRole(#[from] NonEditableRoleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Events(#[from] EventError),
}

pub type RoleServiceResult<T> = Result<T, RoleServiceError>;

impl From<RoleServiceError> for TgError {
    fn from(err: RoleServiceError) -> Self {
        match err {
            RoleServiceError::NonEditableRole(e) => TgError::bad_request(e.message()),
            RoleServiceError::Repository(e) => e.into(),
            RoleServiceError::Events(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_editable_role_message() {
        let err = RoleServiceError::from(NonEditableRoleError::default());
        assert_eq!(err.to_string(), "Cannot edit permissions in an admin role");
    }

    #[test]
    fn test_into_tg_error() {
        let err: TgError = RoleServiceError::from(NonEditableRoleError::default()).into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "bad_request");

        let err: TgError =
            RoleServiceError::from(RepositoryError::NotFound("ProjectRole".into())).into();
        assert_eq!(err.status_code(), 404);

        let err: TgError = RoleServiceError::from(EventError::Publish("down".into())).into();
        assert_eq!(err.error_code(), "events_error");
    }
}
