//! Shared helpers for handler tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

/// Create a test app with an in-memory database
pub(crate) async fn test_app() -> Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    let state = AppState::new(db);
    routes::create_router(state)
}

/// Create a test app and keep a handle on its store.
pub(crate) async fn test_app_with_db() -> (Router, Arc<SqliteDatabase>) {
    let db = Arc::new(
        SqliteDatabase::in_memory()
            .await
            .expect("Failed to create test database"),
    );
    db.migrate().await.expect("Failed to run migrations");
    let state: AppState<SqliteDatabase> = AppState::new(Arc::clone(&db));
    (routes::create_router(state), db)
}

/// Helper to parse JSON response body
pub(crate) async fn json_body(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Send a request with an optional JSON body, returning status and parsed body.
pub(crate) async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response).await)
}

/// Create a mentor through the API and return its ID.
pub(crate) async fn create_mentor(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/mentors",
        Some(serde_json::json!({
            "name": name,
            "email": format!("{}@mentors.example", name.to_lowercase()),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

/// Create a student through the API and return its ID.
pub(crate) async fn create_student(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/students",
        Some(serde_json::json!({
            "name": name,
            "email": format!("{}@students.example", name.to_lowercase()),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}
