//! Shared response envelope types for API handlers.

use serde::Serialize;

use biotrack_core::types::DbId;

/// Standard `{ "data": T }` response envelope for read endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Response body for endpoints that create a single row: `{ "id": n }`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}
