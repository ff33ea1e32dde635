//! Repository for the `stakeholder_partnership` table.

use biotrack_core::types::DbId;
use sqlx::PgConnection;

use crate::error::WriteError;

const TABLE: &str = "stakeholder_partnership";

/// Inserts stakeholder partnership rows for a project.
pub struct StakeholderPartnershipRepo;

impl StakeholderPartnershipRepo {
    /// Build the parameterized insert statement for one partnership row.
    /// Fails with `StatementBuild` if the partner name is blank.
    fn insert_statement(name: &str) -> Result<&'static str, WriteError> {
        if name.trim().is_empty() {
            return Err(WriteError::StatementBuild {
                table: TABLE,
                reason: "partner name is empty",
            });
        }
        Ok("INSERT INTO stakeholder_partnership (project_id, name) VALUES ($1, $2) RETURNING id")
    }

    /// Insert one stakeholder partnership row for `project_id`, returning
    /// the generated id.
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
