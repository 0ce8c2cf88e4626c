//! Assignment handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use super::{ErrorResponse, StudentResponse};
use crate::api::{ApiError, AppState};
use crate::db::Database;
use crate::service::AssignOutcome;

/// Body returned when no requested student could be assigned.
pub const NO_ELIGIBLE_STUDENTS: &str = "No eligible students found.";

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Bulk assign request DTO
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    /// Mentor receiving the students
    #[schema(example = "a1b2c3d4e5f6")]
    pub mentor_id: String,
    /// Candidate students; only currently unassigned ones are updated
    #[schema(example = json!(["0f1e2d3c4b5a", "5a4b3c2d1e0f"]))]
    pub student_ids: Vec<String>,
}

/// Bulk assign response DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignResponse {
    /// Mentor the students were assigned to
    pub mentor_id: String,
    /// Number of students updated
    pub modified_count: usize,
    /// The updated students
    pub students: Vec<StudentResponse>,
}

/// Reassign request DTO
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReassignRequest {
    /// New mentor for the student
    #[schema(example = "a1b2c3d4e5f6")]
    pub mentor_id: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Assign unassigned students to a mentor
///
/// Students that do not exist or already have a mentor are skipped
#[utoipa::path(
    post,
    path = "/api/assign",
    tag = "assignments",
    request_body = AssignRequest,
    responses(
        (status = 200, description = "Students assigned", body = AssignResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "No eligible students, or unknown mentor", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn assign_students<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<AssignRequest>, JsonRejection>,
) -> Result<Json<AssignResponse>, ApiError> {
    let Json(req) = payload?;

    match state
        .service()
        .assign(&req.mentor_id, &req.student_ids)
        .await?
    {
        AssignOutcome::Assigned {
            mentor_id,
            students,
        } => Ok(Json(AssignResponse {
            mentor_id,
            modified_count: students.len(),
            students: students.into_iter().map(StudentResponse::from).collect(),
        })),
        AssignOutcome::NoEligibleStudents => {
            Err(ApiError::NotFound(NO_ELIGIBLE_STUDENTS.to_string()))
        }
    }
}

/// Assign or change the mentor of one student
#[utoipa::path(
    put,
    path = "/api/assign/{student_id}",
    tag = "assignments",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    request_body = ReassignRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 404, description = "Unknown student or mentor", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn reassign_student<D: Database>(
    State(state): State<AppState<D>>,
    Path(student_id): Path<String>,
    payload: Result<Json<ReassignRequest>, JsonRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    let Json(req) = payload?;

    let student = state
        .service()
        .reassign(&student_id, &req.mentor_id)
        .await?;

    Ok(Json(StudentResponse::from(student)))
}
