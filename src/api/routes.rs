//! API route configuration.

use axum::Router;
use axum::routing::{get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, AssignRequest, AssignResponse, CreateMentorRequest, CreateStudentRequest,
    ErrorResponse, HealthResponse, MentorResponse, PaginatedMentors, PaginatedStudents,
    ReassignRequest, StudentResponse,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mentorship API",
        version = "0.1.0",
        description = "Mentor and student records with one-mentor-per-student assignment",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::create_mentor,
        handlers::list_mentors,
        handlers::get_mentor,
        handlers::list_mentor_students,
        handlers::create_student,
        handlers::list_students,
        handlers::get_student,
        handlers::get_student_mentor,
        handlers::assign_students,
        handlers::reassign_student,
    ),
    components(
        schemas(
            HealthResponse,
            MentorResponse,
            CreateMentorRequest,
            PaginatedMentors,
            StudentResponse,
            CreateStudentRequest,
            PaginatedStudents,
            AssignRequest,
            AssignResponse,
            ReassignRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "mentors", description = "Mentor management endpoints"),
        (name = "students", description = "Student management endpoints"),
        (name = "assignments", description = "Mentor/student assignment endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    let mentor_routes = routes!(D => {
        post "/api/mentors" => handlers::create_mentor,
        get "/api/mentors" => handlers::list_mentors,
        get "/api/mentors/{mentor_id}" => handlers::get_mentor,
        get "/api/mentors/{mentor_id}/students" => handlers::list_mentor_students,
    });

    let student_routes = routes!(D => {
        post "/api/students" => handlers::create_student,
        get "/api/students" => handlers::list_students,
        get "/api/students/{student_id}" => handlers::get_student,
        get "/api/students/{student_id}/mentor" => handlers::get_student_mentor,
    });

    let assignment_routes = routes!(D => {
        post "/api/assign" => handlers::assign_students,
        put "/api/assign/{student_id}" => handlers::reassign_student,
    });

    system_routes
        .merge(mentor_routes)
        .merge(student_routes)
        .merge(assignment_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
