//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(mentorship::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(mentorship::db::validation_error))]
    Validation { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(mentorship::db::constraint))]
    Constraint { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(mentorship::db::connection_error),
        help("Check that the database file is reachable and the server has not shut down.")
    )]
    Connection { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(mentorship::db::migration_error))]
    Migration { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(mentorship::db::database_error))]
    Database { message: String },
}

impl DbError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        DbError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                DbError::Connection {
                    message: e.to_string(),
                }
            }
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation() || db_err.is_foreign_key_violation() =>
            {
                DbError::Constraint {
                    message: db_err.message().to_string(),
                }
            }
            _ => DbError::Database {
                message: e.to_string(),
            },
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        DbError::Migration {
            message: e.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
