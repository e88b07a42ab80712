//! Document slots: catalog, reconciliation, upload, delete.

mod helpers;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;

use hrportal_auth::role::Role;

use helpers::{OWN_EMPLOYEE_ID, TestApp, upload_form};

const BOUNDARY: &str = "X-TEST-BOUNDARY";

fn pdf_form(document_type_id: &str, employee_id: &str) -> Vec<u8> {
    upload_form(
        BOUNDARY,
        document_type_id,
        employee_id,
        "dni.pdf",
        "application/pdf",
        b"%PDF-1.4 test",
    )
}

#[tokio::test]
async fn test_employee_reads_own_reconciled_slots() {
    let app = TestApp::spawn().await;
    app.stub.seed_document(OWN_EMPLOYEE_ID, 2).await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request(
            "GET",
            &format!("/api/employees/{OWN_EMPLOYEE_ID}/documents"),
            None,
            Some(&emp),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let slots = resp.body["data"]["slots"].as_array().expect("slots missing");
    assert_eq!(slots.len(), 2);
    // Catalog order is preserved: DNI first, Contrato second.
    assert_eq!(slots[0]["state"], "empty");
    assert_eq!(slots[0]["doc_type"]["name"], "DNI");
    assert_eq!(slots[1]["state"], "filled");
    assert_eq!(slots[1]["doc_type"]["name"], "Contrato");
    assert_eq!(resp.body["data"]["documents"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_employee_cannot_read_another_employees_documents() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request("GET", "/api/employees/8/documents", None, Some(&emp))
        .await;

    assert_eq!(resp.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_hr_reads_any_employees_documents() {
    let app = TestApp::spawn().await;
    let hr = app.session_cookie(Role::Hr);

    let resp = app
        .request(
            "GET",
            &format!("/api/employees/{OWN_EMPLOYEE_ID}/documents"),
            None,
            Some(&hr),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_upload_fills_the_slot() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request_multipart(
            "/api/documents/upload",
            &emp,
            BOUNDARY,
            pdf_form("1", &OWN_EMPLOYEE_ID.to_string()),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK, "body: {:?}", resp.body);
    assert_eq!(resp.body["data"]["document_type_id"], 1);
    assert_eq!(resp.body["data"]["employee_id"], OWN_EMPLOYEE_ID);
    assert_eq!(app.stub.upload_calls.load(Ordering::SeqCst), 1);

    let resp = app
        .request(
            "GET",
            &format!("/api/employees/{OWN_EMPLOYEE_ID}/documents"),
            None,
            Some(&emp),
        )
        .await;
    assert_eq!(resp.body["data"]["slots"][0]["state"], "filled");
}

#[tokio::test]
async fn test_upload_with_non_numeric_type_never_reaches_backend() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request_multipart(
            "/api/documents/upload",
            &emp,
            BOUNDARY,
            pdf_form("abc", &OWN_EMPLOYEE_ID.to_string()),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION_ERROR");
    assert_eq!(app.stub.upload_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_upload_against_unknown_catalog_entry_is_rejected() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request_multipart(
            "/api/documents/upload",
            &emp,
            BOUNDARY,
            pdf_form("99", &OWN_EMPLOYEE_ID.to_string()),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stub.upload_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_upload_with_disallowed_mime_is_rejected() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let body = upload_form(
        BOUNDARY,
        "1",
        &OWN_EMPLOYEE_ID.to_string(),
        "dni.txt",
        "text/plain",
        b"not a pdf",
    );
    let resp = app
        .request_multipart("/api/documents/upload", &emp, BOUNDARY, body)
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stub.upload_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_employee_cannot_upload_for_another_employee() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request_multipart("/api/documents/upload", &emp, BOUNDARY, pdf_form("1", "8"))
        .await;

    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert_eq!(app.stub.upload_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_failed_upload_leaves_slots_unchanged() {
    let app = TestApp::spawn().await;
    app.stub.fail_uploads.store(true, Ordering::SeqCst);
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request_multipart(
            "/api/documents/upload",
            &emp,
            BOUNDARY,
            pdf_form("1", &OWN_EMPLOYEE_ID.to_string()),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_GATEWAY);
    assert_eq!(resp.body["error"], "REMOTE_API_ERROR");

    let resp = app
        .request(
            "GET",
            &format!("/api/employees/{OWN_EMPLOYEE_ID}/documents"),
            None,
            Some(&emp),
        )
        .await;
    let slots = resp.body["data"]["slots"].as_array().expect("slots missing");
    assert!(slots.iter().all(|s| s["state"] == "empty"));
}

#[tokio::test]
async fn test_employee_delete_of_unknown_id_is_a_local_noop() {
    let app = TestApp::spawn().await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request("DELETE", "/api/documents/999", None, Some(&emp))
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["deleted"], false);
    assert_eq!(app.stub.delete_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_employee_deletes_own_document() {
    let app = TestApp::spawn().await;
    let id = app.stub.seed_document(OWN_EMPLOYEE_ID, 1).await;
    let emp = app.session_cookie(Role::Employee);

    let resp = app
        .request("DELETE", &format!("/api/documents/{id}"), None, Some(&emp))
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["deleted"], true);
    assert_eq!(app.stub.delete_calls.load(Ordering::SeqCst), 1);

    let resp = app
        .request(
            "GET",
            &format!("/api/employees/{OWN_EMPLOYEE_ID}/documents"),
            None,
            Some(&emp),
        )
        .await;
    assert_eq!(resp.body["data"]["slots"][0]["state"], "empty");
}

#[tokio::test]
async fn test_hr_delete_of_missing_document_is_not_found() {
    let app = TestApp::spawn().await;
    let hr = app.session_cookie(Role::Hr);

    let resp = app
        .request("DELETE", "/api/documents/555", None, Some(&hr))
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(app.stub.delete_calls.load(Ordering::SeqCst), 1);
}
