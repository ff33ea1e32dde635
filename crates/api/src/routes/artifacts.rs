//! Route definitions for project artifacts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artifacts;
use crate::state::AppState;

/// Routes mounted under `/projects/{project_id}/artifacts`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_id}/artifacts/upload",
            post(artifacts::upload),
        )
        .route(
            "/projects/{project_id}/artifacts/{file_name}/download",
            get(artifacts::download),
        )
}
