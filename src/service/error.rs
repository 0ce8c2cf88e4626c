//! Service error types.

use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

/// Errors surfaced by `AssignmentService` operations.
///
/// An empty bulk assignment is not an error; see `AssignOutcome`.
#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    #[diagnostic(code(mentorship::service::validation))]
    Validation { message: String },

    #[error("{entity_type} '{id}' not found")]
    #[diagnostic(code(mentorship::service::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Conflict: {message}")]
    #[diagnostic(code(mentorship::service::conflict))]
    Conflict { message: String },

    #[error("Store unavailable: {message}")]
    #[diagnostic(code(mentorship::service::unavailable))]
    Unavailable { message: String },

    #[error("Store error: {message}")]
    #[diagnostic(code(mentorship::service::database))]
    Database { message: String },
}

impl ServiceError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        ServiceError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<DbError> for ServiceError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { entity_type, id } => ServiceError::NotFound { entity_type, id },
            DbError::Validation { message } => ServiceError::Validation { message },
            DbError::Constraint { message } => ServiceError::Conflict { message },
            DbError::Connection { message } => ServiceError::Unavailable { message },
            DbError::Migration { message } | DbError::Database { message } => {
                ServiceError::Database { message }
            }
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
