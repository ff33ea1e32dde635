//! Handlers for the `/project` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use biotrack_core::error::CoreError;
use biotrack_core::types::DbId;
use biotrack_db::models::project::{CreateProjectSubmission, Project, ProjectDetail};
use biotrack_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireWrite;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// POST /api/v1/project
///
/// Create a project and all of its dependent rows in one transaction.
pub async fn create(
    RequireWrite(user): RequireWrite,
    State(state): State<AppState>,
    Json(input): Json<CreateProjectSubmission>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let submission = input.sanitized()?;
    let id = ProjectRepo::create_full(&state.pool, &submission).await?;

    tracing::info!(project_id = id, user_id = user.user_id, "Project submission accepted");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/v1/project/{id}
///
/// Fetch a project with all of its child collections.
pub async fn get_detail(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let detail = ProjectRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/projects
///
/// List project rows, most recently created first.
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}
