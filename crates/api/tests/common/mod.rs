#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tokio::sync::Mutex;
use tower::ServiceExt;

use biotrack_api::auth::jwt::{generate_token, JwtConfig};
use biotrack_api::config::{ArtifactConfig, ServerConfig};
use biotrack_api::router::build_app_router;
use biotrack_api::state::AppState;
use biotrack_api::storage::{ArtifactMetadata, ObjectStore, StoreError};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// In-memory object store so tests never touch real S3.
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait::async_trait]
impl ObjectStore for MemoryStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _metadata: &ArtifactMetadata,
    ) -> Result<(), StoreError> {
        self.objects.lock().await.insert(key.to_string(), bytes);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.objects.lock().await.get(key).cloned())
    }
}

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry_mins: 5,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
        artifacts: ArtifactConfig {
            bucket: "test-artifacts".to_string(),
            endpoint: None,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and an in-memory artifact store.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        artifacts: Arc::new(MemoryStore::default()),
    };
    build_app_router(state, &config)
}

/// Mint a token whose role grants write access.
pub fn write_token() -> String {
    generate_token(
        &test_jwt_config(),
        1,
        "tester",
        Some("tester@example.com"),
        "project_editor",
    )
    .unwrap()
}

/// Mint a token whose role does not grant write access.
pub fn read_only_token() -> String {
    generate_token(&test_jwt_config(), 2, "observer", None, "reviewer").unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get_with_token(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// A well-formed project creation submission with one entry in each
/// optional collection group.
pub fn full_submission(name: &str) -> serde_json::Value {
    serde_json::json!({
        "project": {
            "name": name,
            "start_date": "2021-02-01",
            "end_date": "2021-12-31"
        },
        "objectives": { "objectives": "Track population trends" },
        "coordinator": {
            "first_name": "Jo",
            "last_name": "Fraser",
            "email_address": "jo.fraser@example.com",
            "coordinator_agency": "Ministry of Environment"
        },
        "location": { "regions": ["West Coast"] },
        "species": {
            "focal_species": ["Grizzly Bear"],
            "ancillary_species": []
        },
        "funding": {
            "funding_agencies": [{
                "agency_id": 1,
                "investment_action_category": 1,
                "agency_project_id": "TW-21-004",
                "funding_amount": 25000.0,
                "start_date": "2021-02-01",
                "end_date": "2021-12-31"
            }],
            "indigenous_partnerships": [1],
            "stakeholder_partnerships": ["Pacific Salmon Foundation"]
        }
    })
}
