//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Reads
//! and the creation orchestrator accept `&PgPool`; the child-insert
//! operations accept `&mut PgConnection` so they execute inside the
//! request's creation transaction.

pub mod ancillary_species_repo;
pub mod code_repo;
pub mod focal_species_repo;
pub mod funding_source_repo;
pub mod indigenous_nation_repo;
pub mod project_region_repo;
pub mod project_repo;
pub mod stakeholder_partnership_repo;

pub use ancillary_species_repo::AncillarySpeciesRepo;
pub use code_repo::CodeRepo;
pub use focal_species_repo::FocalSpeciesRepo;
pub use funding_source_repo::FundingSourceRepo;
pub use indigenous_nation_repo::IndigenousNationRepo;
pub use project_region_repo::ProjectRegionRepo;
pub use project_repo::ProjectRepo;
pub use stakeholder_partnership_repo::StakeholderPartnershipRepo;
