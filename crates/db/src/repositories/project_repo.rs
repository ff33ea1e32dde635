//! Repository for the `project` table and the multi-table creation
//! workflow.
//!
//! `create_full` is the only write path: one transaction inserts the root
//! project row plus every dependent child row, or nothing at all.

use biotrack_core::types::DbId;
use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};

use crate::error::WriteError;
use crate::models::project::{
    CreateProjectSubmission, Project, ProjectDetail, ProjectFundingSourceRow,
};
use crate::repositories::{
    AncillarySpeciesRepo, FocalSpeciesRepo, FundingSourceRepo, IndigenousNationRepo,
    ProjectRegionRepo, StakeholderPartnershipRepo,
};

const TABLE: &str = "project";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, objectives, caveats, management_recovery_action, \
    scientific_collection_permit_number, location_description, geometry, \
    start_date, end_date, coordinator_first_name, coordinator_last_name, \
    coordinator_email_address, coordinator_agency_name, share_contact_details, \
    created_at, updated_at";

/// The merged root-insert input, assembled from the submission's project,
/// location, objectives and coordinator sections before the transaction
/// opens.
#[derive(Debug)]
struct RootInsert<'a> {
    name: &'a str,
    objectives: &'a str,
    caveats: Option<&'a str>,
    management_recovery_action: Option<&'a str>,
    scientific_collection_permit_number: Option<&'a str>,
    location_description: Option<&'a str>,
    geometry: Option<&'a serde_json::Value>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    coordinator_first_name: &'a str,
    coordinator_last_name: &'a str,
    coordinator_email_address: &'a str,
    coordinator_agency_name: &'a str,
    share_contact_details: bool,
}

impl<'a> RootInsert<'a> {
    /// Merge the submission sections into the root-insert input.
    ///
    /// Fails with `StatementBuild` when the merged fields cannot form a
    /// valid statement; nothing has been opened against the database yet.
    fn from_submission(submission: &'a CreateProjectSubmission) -> Result<Self, WriteError> {
        let build_err = |reason: &'static str| WriteError::StatementBuild {
            table: TABLE,
            reason,
        };

        if submission.project.name.trim().is_empty() {
            return Err(build_err("project name is empty"));
        }
        if submission.objectives.objectives.trim().is_empty() {
            return Err(build_err("project objectives are empty"));
        }
        if submission.coordinator.email_address.trim().is_empty() {
            return Err(build_err("coordinator email address is empty"));
        }
        if let Some(end_date) = submission.project.end_date {
            if end_date < submission.project.start_date {
                return Err(build_err("project end date precedes start date"));
            }
        }

        Ok(Self {
            name: submission.project.name.trim(),
            objectives: submission.objectives.objectives.trim(),
            caveats: submission.objectives.caveats.as_deref(),
            management_recovery_action: submission.project.management_recovery_action.as_deref(),
            scientific_collection_permit_number: submission
                .project
                .scientific_collection_permit_number
                .as_deref(),
            location_description: submission.location.location_description.as_deref(),
            geometry: submission.location.geometry.as_ref(),
            start_date: submission.project.start_date,
            end_date: submission.project.end_date,
            coordinator_first_name: &submission.coordinator.first_name,
            coordinator_last_name: &submission.coordinator.last_name,
            coordinator_email_address: &submission.coordinator.email_address,
            coordinator_agency_name: &submission.coordinator.coordinator_agency,
            share_contact_details: submission.coordinator.share_contact_details,
        })
    }
}

/// Provides the creation workflow and read operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Create a project and all of its child rows as one atomic unit.
    ///
    /// The root insert strictly precedes every child insert (children carry
    /// its foreign key). The transaction's single connection serializes the
    /// statements; the child groups are mutually independent and nothing
    /// may rely on their relative order. Any failure propagates out, the
    /// transaction guard rolls back on drop, and the connection returns to
    /// the pool; no partial project is ever visible.
    pub async fn create_full(
        pool: &PgPool,
        submission: &CreateProjectSubmission,
    ) -> Result<DbId, WriteError> {
        // Built before the transaction opens: a malformed merged section
        // fails here with nothing to roll back.
        let root = RootInsert::from_submission(submission)?;

        let mut tx = pool.begin().await?;

        let project_id = Self::insert_root(&mut *tx, &root).await?;

        for name in &submission.species.focal_species {
            FocalSpeciesRepo::create(&mut *tx, name, project_id).await?;
        }
        for name in &submission.species.ancillary_species {
            AncillarySpeciesRepo::create(&mut *tx, name, project_id).await?;
        }
        for name in &submission.location.regions {
            ProjectRegionRepo::create(&mut *tx, name, project_id).await?;
        }
        for agency in &submission.funding.funding_agencies {
            FundingSourceRepo::create(&mut *tx, agency, project_id).await?;
        }
        for first_nations_id in &submission.funding.indigenous_partnerships {
            IndigenousNationRepo::create(&mut *tx, *first_nations_id, project_id).await?;
        }
        for name in &submission.funding.stakeholder_partnerships {
            StakeholderPartnershipRepo::create(&mut *tx, name, project_id).await?;
        }

        tx.commit().await?;

        tracing::info!(
            project_id,
            focal_species = submission.species.focal_species.len(),
            ancillary_species = submission.species.ancillary_species.len(),
            regions = submission.location.regions.len(),
            funding_sources = submission.funding.funding_agencies.len(),
            indigenous_partnerships = submission.funding.indigenous_partnerships.len(),
            stakeholder_partnerships = submission.funding.stakeholder_partnerships.len(),
            "Project created",
        );

        Ok(project_id)
    }

    /// Execute the root insert, returning the generated project id.
    async fn insert_root(
        conn: &mut PgConnection,
        input: &RootInsert<'_>,
    ) -> Result<DbId, WriteError> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "INSERT INTO project \
                (name, objectives, caveats, management_recovery_action, \
                 scientific_collection_permit_number, location_description, \
                 geometry, start_date, end_date, coordinator_first_name, \
                 coordinator_last_name, coordinator_email_address, \
                 coordinator_agency_name, share_contact_details) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING id",
        )
        .bind(input.name)
        .bind(input.objectives)
        .bind(input.caveats)
        .bind(input.management_recovery_action)
        .bind(input.scientific_collection_permit_number)
        .bind(input.location_description)
        .bind(input.geometry)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.coordinator_first_name)
        .bind(input.coordinator_last_name)
        .bind(input.coordinator_email_address)
        .bind(input.coordinator_agency_name)
        .bind(input.share_contact_details)
        .fetch_optional(conn)
        .await?;

        row.map(|(id,)| id)
            .ok_or(WriteError::InsertFailure { table: TABLE })
    }

    /// Find a project row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project with all of its child collections.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let focal_species = Self::child_names(pool, "focal_species", id).await?;
        let ancillary_species = Self::child_names(pool, "ancillary_species", id).await?;
        let regions = Self::child_names(pool, "project_region", id).await?;
        let stakeholder_partnerships =
            Self::child_names(pool, "stakeholder_partnership", id).await?;

        let funding_sources: Vec<ProjectFundingSourceRow> = sqlx::query_as(
            "SELECT id, agency_id, investment_action_category_id, agency_project_id, \
                    funding_amount, start_date, end_date \
             FROM project_funding_source WHERE project_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let indigenous_partnerships: Vec<DbId> = sqlx::query_scalar(
            "SELECT first_nations_id FROM project_first_nation \
             WHERE project_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(ProjectDetail {
            project,
            focal_species,
            ancillary_species,
            regions,
            funding_sources,
            indigenous_partnerships,
            stakeholder_partnerships,
        }))
    }

    /// List all project rows, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Fetch the `name` column of a `(project_id, name)` child table.
    async fn child_names(
        pool: &PgPool,
        table: &str,
        project_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        let query = format!("SELECT name FROM {table} WHERE project_id = $1 ORDER BY id");
        sqlx::query_scalar(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn submission() -> CreateProjectSubmission {
        serde_json::from_value(serde_json::json!({
            "project": {
                "name": "Skeena Sockeye Monitoring",
                "start_date": "2021-02-01",
                "end_date": "2021-11-30"
            },
            "objectives": { "objectives": "Estimate escapement" },
            "coordinator": {
                "first_name": "Robin",
                "last_name": "Mills",
                "email_address": "robin.mills@example.com",
                "coordinator_agency": "Pacific Salmon Foundation"
            }
        }))
        .unwrap()
    }

    #[test]
    fn root_statement_builds_from_a_sane_submission() {
        assert!(RootInsert::from_submission(&submission()).is_ok());
    }

    #[test]
    fn blank_name_fails_the_root_statement_build() {
        let mut bad = submission();
        bad.project.name = "  ".to_string();
        let err = RootInsert::from_submission(&bad).unwrap_err();
        assert_matches!(err, WriteError::StatementBuild { table: "project", .. });
    }

    #[test]
    fn inverted_date_range_fails_the_root_statement_build() {
        let mut bad = submission();
        bad.project.end_date = Some(chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let err = RootInsert::from_submission(&bad).unwrap_err();
        assert_matches!(
            err,
            WriteError::StatementBuild {
                table: "project",
                reason: "project end date precedes start date",
            }
        );
    }
}
