//! Repository for the `focal_species` table.

use biotrack_core::types::DbId;
use sqlx::PgConnection;

use crate::error::WriteError;

const TABLE: &str = "focal_species";

/// Inserts focal species rows for a project.
pub struct FocalSpeciesRepo;

impl FocalSpeciesRepo {
    /// Build the parameterized insert statement for one focal species row.
    ///
    /// Fails with `StatementBuild` if the species name is blank; no query
    /// is issued in that case.
    fn insert_statement(name: &str) -> Result<&'static str, WriteError> {
        if name.trim().is_empty() {
            return Err(WriteError::StatementBuild {
                table: TABLE,
                reason: "species name is empty",
            });
        }
        Ok("INSERT INTO focal_species (project_id, name) VALUES ($1, $2) RETURNING id")
    }

    /// Insert one focal species row for `project_id`, returning the
    /// generated id.
    pub async fn create(
        conn: &mut PgConnection,
        name: &str,
        project_id: DbId,
    ) -> Result<DbId, WriteError> {
        let statement = Self::insert_statement(name)?;
        let row: Option<(DbId,)> = sqlx::query_as(statement)
            .bind(project_id)
            .bind(name.trim())
            .fetch_optional(conn)
            .await?;
        row.map(|(id,)| id)
            .ok_or(WriteError::InsertFailure { table: TABLE })
    }
}
