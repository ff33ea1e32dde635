//! Integration tests for project creation and reads over HTTP.

mod common;

use axum::http::StatusCode;
use common::{body_json, full_submission, get_with_token, post_json, read_only_token, write_token};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_read_back_a_project(pool: PgPool) {
    let token = write_token();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/project",
        Some(&token),
        &full_submission("Grizzly Bear Recovery"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let id = json["id"].as_i64().expect("response must carry the new id");
    assert!(id > 0);

    let response = get_with_token(
        common::build_test_app(pool),
        &format!("/api/v1/project/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Grizzly Bear Recovery");
    assert_eq!(json["data"]["focal_species"], serde_json::json!(["Grizzly Bear"]));
    assert_eq!(json["data"]["regions"], serde_json::json!(["West Coast"]));
    assert_eq!(json["data"]["indigenous_partnerships"], serde_json::json!([1]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_requires_authentication(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/project",
        None,
        &full_submission("Anonymous Project"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_requires_a_write_role(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/project",
        Some(&read_only_token()),
        &full_submission("Read Only Project"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_submission_returns_validation_error(pool: PgPool) {
    let mut body = full_submission("Invalid Project");
    body["project"]["name"] = serde_json::json!("");

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/project",
        Some(&write_token()),
        &body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_child_insert_leaves_no_partial_project(pool: PgPool) {
    // The nation id violates the foreign key after the root row and the
    // other children have been inserted into the open transaction.
    let mut body = full_submission("Doomed Project");
    body["funding"]["indigenous_partnerships"] = serde_json::json!([987654]);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/project",
        Some(&write_token()),
        &body,
    )
    .await;
    assert!(!response.status().is_success());

    let projects: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(projects, 0);

    let focal: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM focal_species")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(focal, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_created_projects_newest_first(pool: PgPool) {
    let token = write_token();

    for name in ["First Project", "Second Project"] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/project",
            Some(&token),
            &full_submission(name),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_with_token(common::build_test_app(pool), "/api/v1/projects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Second Project", "First Project"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_project_returns_404(pool: PgPool) {
    let response = get_with_token(
        common::build_test_app(pool),
        "/api/v1/project/999999",
        &write_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
