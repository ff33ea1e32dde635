//! Handlers for project artifact upload and download.
//!
//! Artifacts are opaque binary blobs stored outside the database, keyed by
//! `{project_id}/{file_name}`.

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use biotrack_core::error::CoreError;
use biotrack_core::types::DbId;
use biotrack_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireWrite;
use crate::state::AppState;
use crate::storage::ArtifactMetadata;

/// Verify that a project exists, returning NotFound if it does not.
async fn ensure_project_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if ProjectRepo::find_by_id(pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    Ok(())
}

/// POST /api/v1/projects/{project_id}/artifacts/upload
///
/// Store every file in the multipart body, returning the storage key of
/// each. A request carrying no files is a bad request.
pub async fn upload(
    RequireWrite(user): RequireWrite,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<Vec<String>>> {
    ensure_project_exists(&state.pool, project_id).await?;

    let metadata = ArtifactMetadata {
        username: user.username.clone(),
        email: user.email.clone().unwrap_or_default(),
    };

    let mut keys = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        // Fields without a filename are form values, not artifacts.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let key = format!("{project_id}/{file_name}");
        state.artifacts.put(&key, bytes.to_vec(), &metadata).await?;

        tracing::debug!(%key, size = bytes.len(), user_id = user.user_id, "Artifact stored");
        keys.push(key);
    }

    if keys.is_empty() {
        return Err(AppError::BadRequest("Missing upload data".into()));
    }

    Ok(Json(keys))
}

/// GET /api/v1/projects/{project_id}/artifacts/{file_name}/download
///
/// Stream a stored artifact back to the caller.
pub async fn download(
    _user: AuthUser,
    State(state): State<AppState>,
    Path((project_id, file_name)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let key = format!("{project_id}/{file_name}");

    let bytes = state
        .artifacts
        .get(&key)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artifact",
            id: project_id,
        }))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    ))
}
