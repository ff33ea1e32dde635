//! Project entity model and the sanitized creation submission.
//!
//! `CreateProjectSubmission` is the shape the multi-step form client posts.
//! The `project`, `objectives` and `coordinator` sections are structurally
//! required; the `location`, `species` and `funding` sections default to
//! empty so an absent collection is treated as "nothing to insert", never
//! as an error.

use biotrack_core::error::CoreError;
use biotrack_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `project` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub objectives: String,
    pub caveats: Option<String>,
    pub management_recovery_action: Option<String>,
    pub scientific_collection_permit_number: Option<String>,
    pub location_description: Option<String>,
    /// GeoJSON drawn on the map client, stored verbatim.
    pub geometry: Option<serde_json::Value>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub coordinator_first_name: String,
    pub coordinator_last_name: String,
    pub coordinator_email_address: String,
    pub coordinator_agency_name: String,
    pub share_contact_details: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `project_funding_source`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectFundingSourceRow {
    pub id: DbId,
    pub agency_id: DbId,
    pub investment_action_category_id: DbId,
    pub agency_project_id: Option<String>,
    pub funding_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A project together with all of its child collections, as returned by
/// `GET /project/{id}`.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub focal_species: Vec<String>,
    pub ancillary_species: Vec<String>,
    pub regions: Vec<String>,
    pub funding_sources: Vec<ProjectFundingSourceRow>,
    pub indigenous_partnerships: Vec<DbId>,
    pub stakeholder_partnerships: Vec<String>,
}

// ---------------------------------------------------------------------------
// Creation submission (sanitizer)
// ---------------------------------------------------------------------------

/// The raw multi-step form submission for `POST /project`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectSubmission {
    #[validate(nested)]
    pub project: ProjectSection,
    #[validate(nested)]
    pub objectives: ObjectivesSection,
    #[validate(nested)]
    pub coordinator: CoordinatorSection,
    #[serde(default)]
    pub location: LocationSection,
    #[serde(default)]
    pub species: SpeciesSection,
    #[serde(default)]
    #[validate(nested)]
    pub funding: FundingSection,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectSection {
    #[validate(length(min = 1, message = "project name is required"))]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub scientific_collection_permit_number: Option<String>,
    pub management_recovery_action: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ObjectivesSection {
    #[validate(length(min = 1, message = "project objectives are required"))]
    pub objectives: String,
    pub caveats: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CoordinatorSection {
    #[validate(length(min = 1, message = "coordinator first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "coordinator last name is required"))]
    pub last_name: String,
    #[validate(email(message = "coordinator email address is invalid"))]
    pub email_address: String,
    #[validate(length(min = 1, message = "coordinator agency is required"))]
    pub coordinator_agency: String,
    #[serde(default)]
    pub share_contact_details: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationSection {
    pub location_description: Option<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    pub geometry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesSection {
    #[serde(default)]
    pub focal_species: Vec<String>,
    #[serde(default)]
    pub ancillary_species: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FundingSection {
    #[serde(default)]
    #[validate(nested)]
    pub funding_agencies: Vec<FundingAgency>,
    #[serde(default)]
    pub indigenous_partnerships: Vec<DbId>,
    #[serde(default)]
    pub stakeholder_partnerships: Vec<String>,
}

/// One declared funding agency within the funding section.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FundingAgency {
    pub agency_id: DbId,
    pub investment_action_category: DbId,
    pub agency_project_id: Option<String>,
    #[validate(range(min = 0.0, message = "funding amount must not be negative"))]
    pub funding_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CreateProjectSubmission {
    /// Validate the structural shape of the submission, returning it
    /// unchanged on success. Runs before any database interaction.
    pub fn sanitized(self) -> Result<Self, CoreError> {
        self.validate().map_err(|errs| {
            let mut messages = Vec::new();
            collect_messages(&errs, "", &mut messages);
            messages.sort();
            CoreError::Validation(messages.join("; "))
        })?;
        Ok(self)
    }
}

/// Flatten a `ValidationErrors` tree into human-readable messages, walking
/// nested structs and lists so funding-agency errors surface too.
fn collect_messages(errs: &validator::ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errs.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errors) => {
                for error in errors {
                    match &error.message {
                        Some(msg) => out.push(msg.to_string()),
                        None => out.push(format!("{path} is invalid")),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_submission() -> serde_json::Value {
        serde_json::json!({
            "project": {
                "name": "Kootenay Caribou Recovery",
                "start_date": "2021-02-01"
            },
            "objectives": { "objectives": "Stabilize the herd" },
            "coordinator": {
                "first_name": "Ann",
                "last_name": "Chovey",
                "email_address": "ann.chovey@example.com",
                "coordinator_agency": "Ministry of Environment"
            }
        })
    }

    #[test]
    fn missing_collection_sections_default_to_empty() {
        let submission: CreateProjectSubmission =
            serde_json::from_value(base_submission()).unwrap();

        assert!(submission.species.focal_species.is_empty());
        assert!(submission.species.ancillary_species.is_empty());
        assert!(submission.location.regions.is_empty());
        assert!(submission.funding.funding_agencies.is_empty());
        assert!(submission.funding.indigenous_partnerships.is_empty());
        assert!(submission.funding.stakeholder_partnerships.is_empty());
    }

    #[test]
    fn missing_required_section_fails_to_deserialize() {
        let mut body = base_submission();
        body.as_object_mut().unwrap().remove("coordinator");

        let result: Result<CreateProjectSubmission, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }

    #[test]
    fn sanitized_accepts_a_well_formed_submission() {
        let submission: CreateProjectSubmission =
            serde_json::from_value(base_submission()).unwrap();
        assert!(submission.sanitized().is_ok());
    }

    #[test]
    fn sanitized_rejects_blank_name_and_bad_email() {
        let mut body = base_submission();
        body["project"]["name"] = serde_json::json!("");
        body["coordinator"]["email_address"] = serde_json::json!("not-an-email");

        let submission: CreateProjectSubmission = serde_json::from_value(body).unwrap();
        let err = submission.sanitized().unwrap_err();

        let message = err.to_string();
        assert!(message.contains("project name is required"), "{message}");
        assert!(
            message.contains("coordinator email address is invalid"),
            "{message}"
        );
    }

    #[test]
    fn sanitized_rejects_negative_funding_amount() {
        let mut body = base_submission();
        body["funding"] = serde_json::json!({
            "funding_agencies": [{
                "agency_id": 1,
                "investment_action_category": 1,
                "funding_amount": -500.0,
                "start_date": "2021-03-01",
                "end_date": "2021-12-31"
            }]
        });

        let submission: CreateProjectSubmission = serde_json::from_value(body).unwrap();
        assert!(submission.sanitized().is_err());
    }
}
