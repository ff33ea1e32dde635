//! Error type for the transactional project write path.
//!
//! Statement-build failures are detected before a query is issued; insert
//! failures name the table that did not yield a generated id. Anything the
//! driver raises (including open/commit) surfaces as `Transaction`.

/// Failure modes of the multi-table project creation workflow.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// A domain value could not be turned into a parameterized statement.
    /// No query is issued when this is raised.
    #[error("Failed to build SQL statement for {table}: {reason}")]
    StatementBuild {
        table: &'static str,
        reason: &'static str,
    },

    /// An insert executed but returned no row carrying a generated id.
    #[error("Failed to insert into {table} table")]
    InsertFailure { table: &'static str },

    /// Infrastructure-level failure in open/query/commit itself.
    #[error("Transaction error: {0}")]
    Transaction(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_target_table() {
        let build = WriteError::StatementBuild {
            table: "focal_species",
            reason: "species name is empty",
        };
        assert_eq!(
            build.to_string(),
            "Failed to build SQL statement for focal_species: species name is empty"
        );

        let insert = WriteError::InsertFailure { table: "project" };
        assert_eq!(insert.to_string(), "Failed to insert into project table");
    }
}
