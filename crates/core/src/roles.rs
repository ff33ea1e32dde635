//! Well-known role name constants.
//!
//! Role names arrive in the `role` claim of the bearer token issued by the
//! identity provider; they are not stored in this service's database.

pub const ROLE_SYSTEM_ADMIN: &str = "system_admin";
pub const ROLE_PROJECT_ADMIN: &str = "project_admin";
pub const ROLE_PROJECT_EDITOR: &str = "project_editor";

/// Roles permitted to create projects and upload artifacts.
pub const WRITE_ROLES: &[&str] = &[ROLE_SYSTEM_ADMIN, ROLE_PROJECT_ADMIN, ROLE_PROJECT_EDITOR];

/// True if `role` grants write access.
pub fn can_write(role: &str) -> bool {
    WRITE_ROLES.contains(&role)
}
