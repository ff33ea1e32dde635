//! Role checks layered on top of [`AuthUser`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use biotrack_core::error::CoreError;
use biotrack_core::roles::can_write;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Extractor requiring a valid token whose role grants write access.
///
/// Project creation and artifact upload are gated on this; read endpoints
/// use [`AuthUser`] directly.
#[derive(Debug, Clone)]
pub struct RequireWrite(pub AuthUser);

impl FromRequestParts<AppState> for RequireWrite {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if !can_write(&user.role) {
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "Role '{}' does not grant write access",
                user.role
            ))));
        }

        Ok(RequireWrite(user))
    }
}
