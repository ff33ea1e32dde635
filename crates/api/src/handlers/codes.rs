//! Handler for the `/codes` lookup endpoint.

use axum::extract::State;
use axum::Json;

use biotrack_db::models::code::AllCodeSets;
use biotrack_db::repositories::CodeRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/codes
///
/// All code sets consumed by client-side form rendering. Public: the
/// client needs these before the user has signed in.
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<DataResponse<AllCodeSets>>> {
    let codes = CodeRepo::get_all(&state.pool).await?;
    Ok(Json(DataResponse { data: codes }))
}
