//! Integration tests for assignment endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::NO_ELIGIBLE_STUDENTS;
use super::test_support::{create_mentor, create_student, json_body, send, test_app};

// =============================================================================
// POST /api/assign - Bulk Assign
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn assign_returns_modified_count_and_students() {
    let app = test_app().await;
    let m = create_mentor(&app, "M").await;
    let s1 = create_student(&app, "S1").await;
    let s2 = create_student(&app, "S2").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/assign",
        Some(json!({ "mentorId": m, "studentIds": [s1, s2] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mentorId"], m.as_str());
    assert_eq!(body["modifiedCount"], 2);
    let ids: Vec<&str> = body["students"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![s1.as_str(), s2.as_str()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_skips_already_assigned_students() {
    let app = test_app().await;
    let m1 = create_mentor(&app, "M1").await;
    let m2 = create_mentor(&app, "M2").await;
    let s1 = create_student(&app, "S1").await;
    let s2 = create_student(&app, "S2").await;
    send(
        &app,
        "POST",
        "/api/assign",
        Some(json!({ "mentorId": m1, "studentIds": [s1] })),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/assign",
        Some(json!({ "mentorId": m2, "studentIds": [s1, s2] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], 1);
    assert_eq!(body["students"][0]["id"], s2.as_str());

    let (_, mentor) = send(&app, "GET", &format!("/api/students/{}/mentor", s1), None).await;
    assert_eq!(mentor["id"], m1.as_str());
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_with_no_eligible_students_is_not_found() {
    let app = test_app().await;
    let m = create_mentor(&app, "M").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/assign",
        Some(json!({ "mentorId": m, "studentIds": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], NO_ELIGIBLE_STUDENTS);
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_to_unknown_mentor_is_not_found() {
    let app = test_app().await;
    let s = create_student(&app, "S").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/assign",
        Some(json!({ "mentorId": "000000000000", "studentIds": [s] })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body["error"], NO_ELIGIBLE_STUDENTS);

    let (_, student) = send(&app, "GET", &format!("/api/students/{}", s), None).await;
    assert_eq!(student["mentorId"], Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_with_malformed_json_is_bad_request() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/assign")
                .header("content-type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_without_student_ids_is_bad_request() {
    let app = test_app().await;
    let m = create_mentor(&app, "M").await;

    let (status, _) = send(&app, "POST", "/api/assign", Some(json!({ "mentorId": m }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// PUT /api/assign/{student_id} - Reassign
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn reassign_overwrites_existing_mentor() {
    let app = test_app().await;
    let m1 = create_mentor(&app, "M1").await;
    let m2 = create_mentor(&app, "M2").await;
    let s = create_student(&app, "S").await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/assign/{}", s),
        Some(json!({ "mentorId": m1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mentorId"], m1.as_str());

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/assign/{}", s),
        Some(json!({ "mentorId": m2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], s.as_str());
    assert_eq!(body["mentorId"], m2.as_str());
}

#[tokio::test(flavor = "multi_thread")]
async fn reassign_unknown_student_is_not_found() {
    let app = test_app().await;
    let m = create_mentor(&app, "M").await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/assign/000000000000",
        Some(json!({ "mentorId": m })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn reassign_to_unknown_mentor_is_not_found() {
    let app = test_app().await;
    let s = create_student(&app, "S").await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/assign/{}", s),
        Some(json!({ "mentorId": "000000000000" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn assign_with_oversized_id_list_assigns_eligible_students() {
    let app = test_app().await;
    let m = create_mentor(&app, "M").await;
    let s = create_student(&app, "S").await;
    let mut ids: Vec<String> = (0..40_000).map(|i| format!("ghost{:07}", i)).collect();
    ids.push(s.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/api/assign",
        Some(json!({ "mentorId": m, "studentIds": ids })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], 1);
    assert_eq!(body["students"][0]["id"], s.as_str());
}
