//! Integration tests for profile endpoints

mod common;

use axum::http::StatusCode;
use pawcare_backend::services::ProfileService;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_profile_defaults_meals_per_day() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Fido", "gender": "male", "variety": "Labrador" });
    let (status, response) = app.post("/api/v1/profiles/", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(profile["meals_per_day"], 2);
    assert_eq!(profile["gender"], "male");
    assert_eq!(profile["variety"], "Labrador");
    assert!(profile["birthday"].is_null());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_profile_name_conflicts() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Rex", "gender": "male", "variety": "Beagle" });
    let (status, _) = app.post("/api/v1/profiles/", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, response) = app.post("/api/v1/profiles/", &body.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["code"], "CONFLICT");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_profile_missing_required_field_rejected() {
    let app = common::TestApp::new().await;

    // gender missing entirely: rejected before any handler logic runs
    let (status, _) = app
        .post(
            "/api/v1/profiles/",
            r#"{"name": "NoGender", "variety": "Poodle"}"#,
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_patch_meals_per_day_lower_bound() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Milo", "gender": "male", "variety": "Corgi" });
    let (status, response) = app.post("/api/v1/profiles/", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = profile["id"].as_i64().unwrap();

    // Zero meals violates the >= 1 constraint
    let (status, response) = app
        .patch(
            &format!("/api/v1/profiles/{}", id),
            r#"{"meals_per_day": 0}"#,
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");

    // A valid count applies and nothing else changes
    let (status, response) = app
        .patch(
            &format!("/api/v1/profiles/{}", id),
            r#"{"meals_per_day": 3}"#,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["meals_per_day"], 3);
    assert_eq!(updated["name"], "Milo");
    assert_eq!(updated["variety"], "Corgi");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_patch_birthday() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Luna", "gender": "female", "variety": "Siamese" });
    let (status, response) = app.post("/api/v1/profiles/", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = profile["id"].as_i64().unwrap();

    let (status, response) = app
        .patch(
            &format!("/api/v1/profiles/{}", id),
            r#"{"birthday": "2021-04-15"}"#,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["birthday"], "2021-04-15");

    // Lookup by name reflects the change
    let (status, response) = app.get("/api/v1/profiles/Luna").await;
    assert_eq!(status, StatusCode::OK);
    let fetched: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(fetched["birthday"], "2021-04-15");

    // Service-level lookup by id agrees
    let by_id = ProfileService::get_by_id(&app.pool, id).await.unwrap();
    assert_eq!(by_id.name, "Luna");
    assert_eq!(
        by_id.birthday,
        Some(chrono::NaiveDate::from_ymd_opt(2021, 4, 15).unwrap())
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_profile_cascades_to_reminders() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Bella", "gender": "female", "variety": "Husky" });
    let (status, response) = app.post("/api/v1/profiles/", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = profile["id"].as_i64().unwrap();

    // Attach a reminder directly; the reminder subsystem has no API surface
    sqlx::query("INSERT INTO reminders (profile_id, title, remind_at) VALUES ($1, $2, now())")
        .bind(id)
        .bind("vet visit")
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, _) = app.delete(&format!("/api/v1/profiles/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM reminders WHERE profile_id = $1")
            .bind(id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);

    // Profile itself is gone
    let (status, _) = app.get("/api/v1/profiles/Bella").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Second delete reports not found
    let (status, _) = app.delete(&format!("/api/v1/profiles/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
