//! Tests for service error mapping.

use crate::db::DbError;
use crate::service::ServiceError;

#[test]
fn db_not_found_keeps_entity_and_id() {
    let err: ServiceError = DbError::NotFound {
        entity_type: "Student".to_string(),
        id: "abc123def456".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "Student 'abc123def456' not found");
}

#[test]
fn db_error_kinds_map_to_service_kinds() {
    let cases = [
        (
            DbError::Validation {
                message: "bad".to_string(),
            },
            "Validation",
        ),
        (
            DbError::Constraint {
                message: "fk".to_string(),
            },
            "Conflict",
        ),
        (
            DbError::Connection {
                message: "closed".to_string(),
            },
            "Unavailable",
        ),
        (
            DbError::Migration {
                message: "oops".to_string(),
            },
            "Database",
        ),
        (
            DbError::Database {
                message: "oops".to_string(),
            },
            "Database",
        ),
    ];

    for (db_err, expected) in cases {
        let kind = match ServiceError::from(db_err) {
            ServiceError::Validation { .. } => "Validation",
            ServiceError::NotFound { .. } => "NotFound",
            ServiceError::Conflict { .. } => "Conflict",
            ServiceError::Unavailable { .. } => "Unavailable",
            ServiceError::Database { .. } => "Database",
        };
        assert_eq!(kind, expected);
    }
}
