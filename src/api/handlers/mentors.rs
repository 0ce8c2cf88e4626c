//! Mentor handlers.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use super::{ErrorResponse, StudentResponse, page_sort};
use crate::api::{ApiError, AppState};
use crate::db::{Database, Mentor, MentorQuery};
use crate::service::NewMentor;

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Mentor response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct MentorResponse {
    /// Unique identifier (12-character hex)
    #[schema(example = "a1b2c3d4e5f6")]
    pub id: String,
    /// Display name
    #[schema(example = "Grace Hopper")]
    pub name: String,
    /// Contact email
    #[schema(example = "grace@example.com")]
    pub email: String,
}

impl From<Mentor> for MentorResponse {
    fn from(m: Mentor) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
        }
    }
}

/// Create mentor request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMentorRequest {
    /// Display name
    #[schema(example = "Grace Hopper")]
    pub name: String,
    /// Contact email
    #[schema(example = "grace@example.com")]
    pub email: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMentorsQuery {
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
pub struct PaginatedMentors {
    pub items: Vec<MentorResponse>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a new mentor
#[utoipa::path(
    post,
    path = "/api/mentors",
    tag = "mentors",
    request_body = CreateMentorRequest,
    responses(
        (status = 201, description = "Mentor created", body = MentorResponse),
        (status = 400, description = "Invalid mentor fields", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_mentor<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateMentorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MentorResponse>), ApiError> {
    let Json(req) = payload?;

    let mentor = state
        .service()
        .create_mentor(NewMentor {
            name: req.name,
            email: req.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MentorResponse::from(mentor))))
}

/// List mentors
///
/// Returns a paginated list of mentors with optional sorting
#[utoipa::path(
    get,
    path = "/api/mentors",
    tag = "mentors",
    params(ListMentorsQuery),
    responses(
        (status = 200, description = "Paginated list of mentors", body = PaginatedMentors),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_mentors<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListMentorsQuery>,
) -> Result<Json<PaginatedMentors>, ApiError> {
    let db_query = MentorQuery {
        page: page_sort(
            query.limit,
            query.offset,
            query.sort.as_deref(),
            query.order.as_deref(),
        ),
    };

    let result = state.service().list_mentors(&db_query).await?;

    Ok(Json(PaginatedMentors {
        items: result.items.into_iter().map(MentorResponse::from).collect(),
        total: result.total,
        limit: db_query.page.limit.unwrap_or_default(),
        offset: result.offset,
    }))
}

/// Get a mentor by ID
#[utoipa::path(
    get,
    path = "/api/mentors/{mentor_id}",
    tag = "mentors",
    params(
        ("mentor_id" = String, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Mentor found", body = MentorResponse),
        (status = 404, description = "Mentor not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_mentor<D: Database>(
    State(state): State<AppState<D>>,
    Path(mentor_id): Path<String>,
) -> Result<Json<MentorResponse>, ApiError> {
    let mentor = state.service().get_mentor(&mentor_id).await?;
    Ok(Json(MentorResponse::from(mentor)))
}

/// List a mentor's students
///
/// An unknown mentor ID yields an empty list
#[utoipa::path(
    get,
    path = "/api/mentors/{mentor_id}/students",
    tag = "mentors",
    params(
        ("mentor_id" = String, Path, description = "Mentor ID")
    ),
    responses(
        (status = 200, description = "Students assigned to the mentor", body = Vec<StudentResponse>),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_mentor_students<D: Database>(
    State(state): State<AppState<D>>,
    Path(mentor_id): Path<String>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = state.service().students_of(&mentor_id).await?;
    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}
