//! Bearer-token validation.
//!
//! Tokens are HS256-signed JWTs issued by the external identity provider
//! with a secret shared with this service. This service only validates;
//! `generate_token` exists for tests and operational tooling.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use biotrack_core::types::DbId;

/// JWT claims carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject, the user's id at the identity provider.
    pub sub: DbId,
    /// The user's login name.
    pub preferred_username: String,
    /// The user's email address, when the provider shares it.
    pub email: Option<String>,
    /// The user's role name (see `biotrack-core::roles`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier for audit trails.
    pub jti: String,
}

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Token lifetime in minutes, used only when generating tokens.
    pub token_expiry_mins: i64,
}

/// Default token expiry in minutes.
const DEFAULT_TOKEN_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let token_expiry_mins: i64 = std::env::var("JWT_TOKEN_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_TOKEN_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            token_expiry_mins,
        }
    }
}

/// Generate an HS256 token for the given subject and role.
pub fn generate_token(
    config: &JwtConfig,
    sub: DbId,
    preferred_username: &str,
    email: Option<&str>,
    role: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub,
        preferred_username: preferred_username.to_string(),
        email: email.map(str::to_string),
        role: role.to_string(),
        exp: (now + chrono::Duration::minutes(config.token_expiry_mins)).timestamp(),
        iat: now.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a token's signature and expiry, returning its claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry_mins: 5,
        }
    }

    #[test]
    fn round_trips_claims() {
        let token = generate_token(
            &config(),
            42,
            "jfraser",
            Some("jo.fraser@example.com"),
            "project_editor",
        )
        .unwrap();

        let claims = validate_token(&token, &config()).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.preferred_username, "jfraser");
        assert_eq!(claims.role, "project_editor");
    }

    #[test]
    fn rejects_a_token_signed_with_a_different_secret() {
        let token = generate_token(&config(), 1, "eve", None, "system_admin").unwrap();

        let other = JwtConfig {
            secret: "other-secret".to_string(),
            token_expiry_mins: 5,
        };
        assert!(validate_token(&token, &other).is_err());
    }
}
