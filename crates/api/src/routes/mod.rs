pub mod artifacts;
pub mod codes;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /project                                          create
/// /project/{id}                                     detail
/// /projects                                         list
/// /projects/{project_id}/artifacts/upload           upload
/// /projects/{project_id}/artifacts/{file_name}/download   download
/// /codes                                            code sets (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(artifacts::router())
        .merge(codes::router())
}
