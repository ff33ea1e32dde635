//! Repository for the seeded reference (code) tables.

use sqlx::PgPool;

use crate::models::code::{AllCodeSets, CodeRow, InvestmentActionCategoryRow};

/// Reads the code sets consumed by client-side form rendering.
pub struct CodeRepo;

impl CodeRepo {
    /// Fetch every code set.
    ///
    /// The five database-backed sets are independent reads, fetched
    /// concurrently on separate pool connections and merged with the
    /// hardcoded sets from `biotrack-core::codes`.
    pub async fn get_all(pool: &PgPool) -> Result<AllCodeSets, sqlx::Error> {
        let (
            management_action_type,
            climate_change_initiative,
            first_nations,
            funding_source,
            investment_action_category,
        ) = tokio::try_join!(
            Self::simple_set(pool, "management_action_type"),
            Self::simple_set(pool, "climate_change_initiative"),
            Self::simple_set(pool, "first_nations"),
            Self::simple_set(pool, "funding_source"),
            Self::investment_action_categories(pool),
        )?;

        Ok(AllCodeSets {
            management_action_type,
            climate_change_initiative,
            first_nations,
            funding_source,
            investment_action_category,
            project_activity: biotrack_core::codes::PROJECT_ACTIVITIES,
            project_type: biotrack_core::codes::PROJECT_TYPES,
            region: biotrack_core::codes::REGIONS,
            species: biotrack_core::codes::SPECIES,
        })
    }

    /// Fetch one `(id, name)` reference table, ordered by id.
    async fn simple_set(pool: &PgPool, table: &str) -> Result<Vec<CodeRow>, sqlx::Error> {
        let query = format!("SELECT id, name FROM {table} ORDER BY id");
        sqlx::query_as(&query).fetch_all(pool).await
    }

    async fn investment_action_categories(
        pool: &PgPool,
    ) -> Result<Vec<InvestmentActionCategoryRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, funding_source_id, name FROM investment_action_category ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
