//! Integration tests for the onboarding submission endpoint.
//!
//! Exercises the full stack: JSON deserialization, trust-boundary
//! revalidation, the `clients` insert, and the `{ success, message }`
//! response envelope.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{body_json, post_json};
use sqlx::PgPool;

use onboard_db::repositories::ClientRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "fullName": "Jane Doe",
        "email": "jane@example.com",
        "companyName": "Acme Co",
        "services": ["UI/UX"],
        "budgetUsd": 5000,
        "projectStartDate": Utc::now().date_naive().to_string(),
        "acceptTerms": true,
    })
}

/// POST the payload and assert a 422 whose `errors` array names `field`.
async fn assert_rejected(pool: PgPool, payload: serde_json::Value, field: &str) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/onboard", payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    let errors = json["errors"].as_array().expect("errors array");
    assert!(
        errors.iter().any(|e| e["field"] == field),
        "expected a violation for {field}, got {errors:?}"
    );

    // Nothing may be stored on rejection.
    assert_eq!(ClientRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: a fully valid submission is stored field-for-field
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn valid_submission_is_stored(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let before = Utc::now();
    let payload = valid_submission();
    let submitted_date = payload["projectStartDate"].as_str().unwrap().to_string();

    let response = post_json(app, "/api/onboard", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].is_string());
    // No identifier or stored record is returned to the caller.
    assert!(json.get("data").is_none());

    let rows = ClientRepo::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);

    let record = &rows[0];
    assert_eq!(record.full_name, "Jane Doe");
    assert_eq!(record.email, "jane@example.com");
    assert_eq!(record.company_name, "Acme Co");
    assert_eq!(record.services, vec!["UI/UX"]);
    assert_eq!(record.budget_usd, 5000);
    assert_eq!(record.project_start_date.to_string(), submitted_date);
    assert!(record.accept_terms);

    // Timestamps are store-assigned on write.
    assert!(record.created_at >= before);
    assert_eq!(record.created_at, record.updated_at);

    let by_id = ClientRepo::find_by_id(&pool, record.id)
        .await
        .unwrap()
        .expect("stored record must be retrievable");
    assert_eq!(by_id.full_name, record.full_name);
}

// ---------------------------------------------------------------------------
// Test: resubmission is not deduplicated
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn identical_submissions_create_two_records(pool: PgPool) {
    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/onboard", valid_submission()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let rows = ClientRepo::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].id, rows[1].id);
}

// ---------------------------------------------------------------------------
// Test: trust-boundary rejections, one field at a time
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn name_with_digits_is_rejected(pool: PgPool) {
    let mut payload = valid_submission();
    payload["fullName"] = "J4ne D03".into();
    assert_rejected(pool, payload, "fullName").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn invalid_email_is_rejected(pool: PgPool) {
    let mut payload = valid_submission();
    payload["email"] = "not-an-email".into();
    assert_rejected(pool, payload, "email").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn short_company_name_is_rejected(pool: PgPool) {
    let mut payload = valid_submission();
    payload["companyName"] = "A".into();
    assert_rejected(pool, payload, "companyName").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn empty_services_are_rejected(pool: PgPool) {
    let mut payload = valid_submission();
    payload["services"] = serde_json::json!([]);
    assert_rejected(pool, payload, "services").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn budget_below_minimum_is_rejected(pool: PgPool) {
    let mut payload = valid_submission();
    payload["budgetUsd"] = 99.into();
    assert_rejected(pool, payload, "budgetUsd").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn budget_above_maximum_is_rejected(pool: PgPool) {
    let mut payload = valid_submission();
    payload["budgetUsd"] = 1_000_001.into();
    assert_rejected(pool, payload, "budgetUsd").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn past_start_date_is_rejected(pool: PgPool) {
    let mut payload = valid_submission();
    let yesterday = Utc::now().date_naive().pred_opt().unwrap();
    payload["projectStartDate"] = yesterday.to_string().into();
    assert_rejected(pool, payload, "projectStartDate").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn unaccepted_terms_are_rejected(pool: PgPool) {
    let mut payload = valid_submission();
    payload["acceptTerms"] = false.into();
    assert_rejected(pool, payload, "acceptTerms").await;
}

// ---------------------------------------------------------------------------
// Test: all violations are surfaced together
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn multiple_violations_are_reported_together(pool: PgPool) {
    let mut payload = valid_submission();
    payload["fullName"] = "J".into();
    payload["budgetUsd"] = 50.into();
    payload["acceptTerms"] = false.into();

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/onboard", payload).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["fullName", "budgetUsd", "acceptTerms"]);
}

// ---------------------------------------------------------------------------
// Test: malformed bodies never reach the handler
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_service_is_rejected_at_deserialization(pool: PgPool) {
    let mut payload = valid_submission();
    payload["services"] = serde_json::json!(["Consulting"]);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/onboard", payload).await;

    // The closed service enum fails to deserialize, so axum's Json
    // extractor rejects the body before the handler runs.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ClientRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn fractional_budget_is_rejected_at_deserialization(pool: PgPool) {
    let mut payload = valid_submission();
    payload["budgetUsd"] = serde_json::json!(12.5);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/onboard", payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ClientRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: persistence failure produces the generic failure envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn persistence_failure_returns_generic_500(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    // Closing the pool forces every subsequent write to fail.
    pool.close().await;

    let response = post_json(app, "/api/onboard", valid_submission()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
    // The failure cause is not surfaced to the caller.
    assert!(json.get("errors").is_none());
}
