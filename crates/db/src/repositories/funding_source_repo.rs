//! Repository for the `project_funding_source` table.

use biotrack_core::types::DbId;
use sqlx::PgConnection;

use crate::error::WriteError;
use crate::models::project::FundingAgency;

const TABLE: &str = "project_funding_source";

/// Inserts funding source rows for a project.
pub struct FundingSourceRepo;

impl FundingSourceRepo {
    /// Build the parameterized insert statement for one funding source row.
    ///
    /// Fails with `StatementBuild` when the agency or category id is not a
    /// valid identifier, or the funding amount is negative or not finite.
    fn insert_statement(agency: &FundingAgency) -> Result<&'static str, WriteError> {
        if agency.agency_id <= 0 {
            return Err(WriteError::StatementBuild {
                table: TABLE,
                reason: "funding agency id is not a positive identifier",
            });
        }
        if agency.investment_action_category <= 0 {
            return Err(WriteError::StatementBuild {
                table: TABLE,
                reason: "investment action category id is not a positive identifier",
            });
        }
        if !agency.funding_amount.is_finite() || agency.funding_amount < 0.0 {
            return Err(WriteError::StatementBuild {
                table: TABLE,
                reason: "funding amount is not a non-negative number",
            });
        }
        Ok(
            "INSERT INTO project_funding_source \
                (project_id, agency_id, investment_action_category_id, \
                 agency_project_id, funding_amount, start_date, end_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
    }

    /// Insert one funding source row for `project_id`, returning the
    /// generated id.
    pub async fn create(
        conn: &mut PgConnection,
        agency: &FundingAgency,
        project_id: DbId,
    ) -> Result<DbId, WriteError> {
        let statement = Self::insert_statement(agency)?;
        let row: Option<(DbId,)> = sqlx::query_as(statement)
            .bind(project_id)
            .bind(agency.agency_id)
            .bind(agency.investment_action_category)
            .bind(&agency.agency_project_id)
            .bind(agency.funding_amount)
            .bind(agency.start_date)
            .bind(agency.end_date)
            .fetch_optional(conn)
            .await?;
        row.map(|(id,)| id)
            .ok_or(WriteError::InsertFailure { table: TABLE })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn agency() -> FundingAgency {
        FundingAgency {
            agency_id: 1,
            investment_action_category: 1,
            agency_project_id: Some("AG-2021-004".to_string()),
            funding_amount: 25_000.0,
            start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
        }
    }

    #[test]
    fn well_formed_agency_builds() {
        assert!(FundingSourceRepo::insert_statement(&agency()).is_ok());
    }

    #[test]
    fn non_positive_agency_id_fails_the_statement_build() {
        let mut bad = agency();
        bad.agency_id = 0;
        let err = FundingSourceRepo::insert_statement(&bad).unwrap_err();
        assert_matches!(
            err,
            WriteError::StatementBuild { table: "project_funding_source", .. }
        );
    }

    #[test]
    fn negative_or_nan_amount_fails_the_statement_build() {
        for amount in [-1.0, f64::NAN] {
            let mut bad = agency();
            bad.funding_amount = amount;
            assert!(FundingSourceRepo::insert_statement(&bad).is_err());
        }
    }

    /// The failure message must name the funding table, not a sibling's.
    #[test]
    fn insert_failure_names_the_funding_table() {
        let err = WriteError::InsertFailure { table: TABLE };
        assert_eq!(
            err.to_string(),
            "Failed to insert into project_funding_source table"
        );
    }
}
