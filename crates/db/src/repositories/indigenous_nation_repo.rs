//! Repository for the `project_first_nation` table.

use biotrack_core::types::DbId;
use sqlx::PgConnection;

use crate::error::WriteError;

const TABLE: &str = "project_first_nation";

/// Inserts indigenous partnership rows for a project.
pub struct IndigenousNationRepo;

impl IndigenousNationRepo {
    /// Build the parameterized insert statement for one partnership row.
    /// Fails with `StatementBuild` if the nation id is not a valid
    /// identifier.
    fn insert_statement(first_nations_id: DbId) -> Result<&'static str, WriteError> {
        if first_nations_id <= 0 {
            return Err(WriteError::StatementBuild {
                table: TABLE,
                reason: "first nations id is not a positive identifier",
            });
        }
        Ok(
            "INSERT INTO project_first_nation (project_id, first_nations_id) \
             VALUES ($1, $2) RETURNING id",
        )
    }

    /// Insert one indigenous partnership row for `project_id`, returning
    /// the generated id.
    pub async fn create(
        conn: &mut PgConnection,
        first_nations_id: DbId,
        project_id: DbId,
    ) -> Result<DbId, WriteError> {
        let statement = Self::insert_statement(first_nations_id)?;
        let row: Option<(DbId,)> = sqlx::query_as(statement)
            .bind(project_id)
            .bind(first_nations_id)
            .fetch_optional(conn)
            .await?;
        row.map(|(id,)| id)
            .ok_or(WriteError::InsertFailure { table: TABLE })
    }
}
