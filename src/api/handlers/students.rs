//! Student handlers.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use super::{ErrorResponse, MentorResponse, page_sort};
use crate::api::{ApiError, AppState};
use crate::db::{Database, Student, StudentQuery};
use crate::service::NewStudent;

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Student response DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    /// Unique identifier (12-character hex)
    #[schema(example = "0f1e2d3c4b5a")]
    pub id: String,
    /// Display name
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact email
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Assigned mentor ID, null while unassigned
    #[schema(example = "a1b2c3d4e5f6")]
    pub mentor_id: Option<String>,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            mentor_id: s.mentor_id,
        }
    }
}

/// Create student request DTO
///
/// Students always start without a mentor.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    /// Display name
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact email
    #[schema(example = "ada@example.com")]
    pub email: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListStudentsQuery {
    /// Only unassigned students (true) or only assigned ones (false)
    #[param(example = true)]
    pub unassigned: Option<bool>,
    /// Maximum number of items to return
    #[param(example = 20)]
    pub limit: Option<usize>,
    /// Number of items to skip
    #[param(example = 0)]
    pub offset: Option<usize>,
    /// Field to sort by (name, email)
    #[param(example = "name")]
    pub sort: Option<String>,
    /// Sort order (asc, desc)
    #[param(example = "asc")]
    pub order: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PaginatedStudents {
    pub items: Vec<StudentResponse>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a new student
#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Invalid student fields", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_student<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let Json(req) = payload?;

    let student = state
        .service()
        .create_student(NewStudent {
            name: req.name,
            email: req.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))))
}

/// List students
///
/// Returns a paginated list of students, optionally only unassigned ones
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    params(ListStudentsQuery),
    responses(
        (status = 200, description = "Paginated list of students", body = PaginatedStudents),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_students<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListStudentsQuery>,
) -> Result<Json<PaginatedStudents>, ApiError> {
    let db_query = StudentQuery {
        page: page_sort(
            query.limit,
            query.offset,
            query.sort.as_deref(),
            query.order.as_deref(),
        ),
        unassigned: query.unassigned,
        ..Default::default()
    };

    let result = state.service().list_students(&db_query).await?;

    Ok(Json(PaginatedStudents {
        items: result.items.into_iter().map(StudentResponse::from).collect(),
        total: result.total,
        limit: db_query.page.limit.unwrap_or_default(),
        offset: result.offset,
    }))
}

/// Get a student by ID
#[utoipa::path(
    get,
    path = "/api/students/{student_id}",
    tag = "students",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_student<D: Database>(
    State(state): State<AppState<D>>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = state.service().get_student(&student_id).await?;
    Ok(Json(StudentResponse::from(student)))
}

/// Get a student's mentor
///
/// Returns the mentor, or null when the student has none
#[utoipa::path(
    get,
    path = "/api/students/{student_id}/mentor",
    tag = "students",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "The student's mentor, or null", body = Option<MentorResponse>),
        (status = 404, description = "Student not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_student_mentor<D: Database>(
    State(state): State<AppState<D>>,
    Path(student_id): Path<String>,
) -> Result<Json<Option<MentorResponse>>, ApiError> {
    let mentor = state.service().mentor_of(&student_id).await?;
    Ok(Json(mentor.map(MentorResponse::from)))
}
