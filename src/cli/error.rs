//! Errors reported by the `mentorship` client.
//!
//! Non-success API responses are classified by status so each failure can
//! carry help specific to mentors, students and assignments.

use miette::Diagnostic;
use thiserror::Error;

/// Message the server sends when a bulk assign finds nothing to update.
pub const NO_ELIGIBLE_STUDENTS: &str = "No eligible students found.";

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Cannot reach the mentorship server")]
    #[diagnostic(
        code(mentorship::cli::unreachable),
        help(
            "Start it with `mentorship-api` (add `--in-memory` for a throwaway store), \
             or point the client elsewhere with --api-url or MENTORSHIP_API_URL."
        )
    )]
    Unreachable {
        #[source]
        source: reqwest::Error,
    },

    #[error("{message}")]
    #[diagnostic(
        code(mentorship::cli::not_found),
        help("Check the id with `mentorship mentor list` or `mentorship student list`.")
    )]
    NotFound { message: String },

    #[error("{}", NO_ELIGIBLE_STUDENTS)]
    #[diagnostic(
        code(mentorship::cli::no_eligible_students),
        help(
            "Every listed student already has a mentor or does not exist. \
             `mentorship student list --unassigned` shows who can still be assigned; \
             use `mentorship reassign` to move an assigned student."
        )
    )]
    NoEligibleStudents,

    #[error("Rejected: {message}")]
    #[diagnostic(
        code(mentorship::cli::rejected),
        help("Names must be non-empty and emails must look like local@domain.")
    )]
    Rejected { message: String },

    #[error("Server error ({status}): {message}")]
    #[diagnostic(code(mentorship::cli::server))]
    Server { status: u16, message: String },

    #[error("Unreadable response from server: {message}")]
    #[diagnostic(
        code(mentorship::cli::unreadable_response),
        help("Client and server versions may differ; compare `mentorship --version` with GET /.")
    )]
    UnreadableResponse { message: String },
}

impl CliError {
    /// Classify a non-success API response by status and `{error}` message.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 if message == NO_ELIGIBLE_STUDENTS => CliError::NoEligibleStudents,
            404 => CliError::NotFound { message },
            400 | 422 => CliError::Rejected { message },
            _ => CliError::Server { status, message },
        }
    }

    /// HTTP status behind this error, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CliError::NotFound { .. } | CliError::NoEligibleStudents => Some(404),
            CliError::Rejected { .. } => Some(400),
            CliError::Server { status, .. } => Some(*status),
            CliError::Unreachable { .. } | CliError::UnreadableResponse { .. } => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => CliError::from_status(status.as_u16(), e.to_string()),
            None if e.is_connect() || e.is_timeout() => CliError::Unreachable { source: e },
            None => CliError::UnreadableResponse {
                message: e.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::UnreadableResponse {
            message: format!("could not encode output: {}", e),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
