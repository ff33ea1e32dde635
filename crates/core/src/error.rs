//! Domain-level error taxonomy shared by the db and api crates.
//!
//! Transport-free: HTTP status mapping lives in `biotrack-api::error`,
//! database-write failures live in `biotrack-db::error::WriteError`.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Submitted payload failed to sanitize into the expected shape.
    /// Always raised before any database interaction.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
