//! Login, logout, and session cookie behavior.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use hrportal_auth::role::Role;

use helpers::{EMPLOYEE_EMAIL, HR_EMAIL, PASSWORD, TestApp};

#[tokio::test]
async fn test_login_as_hr_sets_session_and_redirects_to_roster() {
    let app = TestApp::spawn().await;

    let resp = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": HR_EMAIL, "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["redirect_to"], "/empleados");
    assert_eq!(resp.body["data"]["user"]["role"], "hr");

    let cookie = resp.set_cookie().expect("no session cookie set");
    assert!(cookie.starts_with(&app.state.config.session.cookie_name));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_login_as_employee_redirects_to_profile() {
    let app = TestApp::spawn().await;

    let resp = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": EMPLOYEE_EMAIL, "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["redirect_to"], "/mi-perfil");
    assert_eq!(resp.body["data"]["user"]["role"], "employee");
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = TestApp::spawn().await;

    let resp = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": HR_EMAIL, "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.body["error"], "UNAUTHORIZED");
    assert!(resp.set_cookie().is_none());
}

#[tokio::test]
async fn test_login_with_malformed_email_never_reaches_backend() {
    let app = TestApp::spawn().await;

    let resp = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "not-an-email", "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_logout_clears_the_session_cookie() {
    let app = TestApp::spawn().await;
    let cookie = app.session_cookie(Role::Hr);

    let resp = app.request("POST", "/auth/logout", None, Some(&cookie)).await;

    assert_eq!(resp.status, StatusCode::OK);
    let set_cookie = resp.set_cookie().expect("no removal cookie set");
    assert!(set_cookie.starts_with(&app.state.config.session.cookie_name));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_profile_endpoint_returns_caller_with_slots() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app.request("GET", "/api/profile", None, Some(&emp)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["user"]["role"], "employee");
    assert_eq!(resp.body["data"]["employee"]["id"], helpers::OWN_EMPLOYEE_ID);
    assert_eq!(resp.body["data"]["slots"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_session_cookie_grants_api_access() {
    let app = TestApp::spawn().await;

    let resp = app.request("GET", "/api/document-types", None, None).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

    let cookie = app.session_cookie(Role::Employee);
    let resp = app
        .request("GET", "/api/document-types", None, Some(&cookie))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"].as_array().map(Vec::len), Some(2));
}
