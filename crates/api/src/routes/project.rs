//! Route definitions for the `/project` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes for project creation and reads.
///
/// ```text
/// POST   /project          -> create
/// GET    /project/{id}     -> get_detail
/// GET    /projects         -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project", post(project::create))
        .route("/project/{id}", get(project::get_detail))
        .route("/projects", get(project::list))
}
