//! Code-set rows and the combined lookup payload served by `GET /codes`.

use biotrack_core::codes::CodeEntry;
use biotrack_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from one of the simple `(id, name)` reference tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CodeRow {
    pub id: DbId,
    pub name: String,
}

/// A row from `investment_action_category`, scoped to a funding source.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InvestmentActionCategoryRow {
    pub id: DbId,
    pub funding_source_id: DbId,
    pub name: String,
}

/// Every code set the client needs to render the project forms.
///
/// The first five sets come from seeded reference tables; the rest are
/// hardcoded in `biotrack-core::codes`.
#[derive(Debug, Serialize)]
pub struct AllCodeSets {
    pub management_action_type: Vec<CodeRow>,
    pub climate_change_initiative: Vec<CodeRow>,
    pub first_nations: Vec<CodeRow>,
    pub funding_source: Vec<CodeRow>,
    pub investment_action_category: Vec<InvestmentActionCategoryRow>,
    pub project_activity: &'static [CodeEntry],
    pub project_type: &'static [CodeEntry],
    pub region: &'static [CodeEntry],
    pub species: &'static [CodeEntry],
}
