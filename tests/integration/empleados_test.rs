//! Roster management endpoints (HR only).

mod helpers;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use serde_json::json;

use hrportal_auth::role::Role;

use helpers::TestApp;

fn valid_employee() -> serde_json::Value {
    json!({
        "first_name": "Nora",
        "last_name": "Vidal",
        "email": "nora@example.com",
        "password": "Str0ngpass",
        "job_title": "Designer",
        "salary": "35000",
    })
}

#[tokio::test]
async fn test_hr_lists_the_roster() {
    let app = TestApp::spawn().await;
    let hr = app.session_cookie(Role::Hr);

    let resp = app.request("GET", "/api/empleados", None, Some(&hr)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_employee_roster_access_is_forbidden() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app.request("GET", "/api/empleados", None, Some(&emp)).await;

    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert_eq!(resp.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_unauthenticated_roster_access_is_unauthorized() {
    let app = TestApp::spawn().await;

    let resp = app.request("GET", "/api/empleados", None, None).await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_hr_creates_an_employee() {
    let app = TestApp::spawn().await;
    let hr = app.session_cookie(Role::Hr);

    let resp = app
        .request("POST", "/api/empleados", Some(valid_employee()), Some(&hr))
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["id"], 3);
    assert_eq!(resp.body["data"]["email"], "nora@example.com");
    assert_eq!(app.stub.create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_weak_password_never_reaches_backend() {
    let app = TestApp::spawn().await;
    let hr = app.session_cookie(Role::Hr);

    let mut body = valid_employee();
    body["password"] = json!("short");
    let resp = app
        .request("POST", "/api/empleados", Some(body), Some(&hr))
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION_ERROR");
    assert_eq!(app.stub.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_negative_salary_is_rejected() {
    let app = TestApp::spawn().await;
    let hr = app.session_cookie(Role::Hr);

    let mut body = valid_employee();
    body["salary"] = json!("-100");
    let resp = app
        .request("POST", "/api/empleados", Some(body), Some(&hr))
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(
        resp.body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("salary")
    );
    assert_eq!(app.stub.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_employee_cannot_create() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request("POST", "/api/empleados", Some(valid_employee()), Some(&emp))
        .await;

    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert_eq!(app.stub.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_hr_updates_an_employee() {
    let app = TestApp::spawn().await;
    let hr = app.session_cookie(Role::Hr);

    let resp = app
        .request(
            "PATCH",
            "/api/empleados/7",
            Some(json!({ "job_title": "Lead Engineer" })),
            Some(&hr),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["id"], 7);
    assert_eq!(resp.body["data"]["job_title"], "Lead Engineer");
}

#[tokio::test]
async fn test_update_with_bad_email_is_rejected() {
    let app = TestApp::spawn().await;
    let hr = app.session_cookie(Role::Hr);

    let resp = app
        .request(
            "PATCH",
            "/api/empleados/7",
            Some(json!({ "email": "nope" })),
            Some(&hr),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_hr_deletes_an_employee() {
    let app = TestApp::spawn().await;
    let hr = app.session_cookie(Role::Hr);

    let resp = app
        .request("DELETE", "/api/empleados/8", None, Some(&hr))
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["message"], "Employee deleted");
}
