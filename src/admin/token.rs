use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::types::{AdminClaims, ADMIN_ROLE};
use crate::shared::AppError;

/// Signs and verifies admin session tokens
#[derive(Clone)]
pub struct TokenConfig {
    secret: String,
    pub expiration_hours: i64,
}

impl TokenConfig {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret,
            expiration_hours,
        }
    }

    /// Creates a signed admin token for `session_id`
    #[instrument(skip(self))]
    pub fn create_token(&self, session_id: String) -> Result<(String, AdminClaims), AppError> {
        let now = Utc::now();
        let exp = (now + Duration::hours(self.expiration_hours)).timestamp() as usize;

        debug!(
            expiration_hours = self.expiration_hours,
            exp_timestamp = exp,
            "Creating admin token"
        );

        let claims = AdminClaims {
            session_id,
            role: ADMIN_ROLE.to_string(),
            exp,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| {
            debug!(error = %e, "Failed to encode admin token");
            AppError::JwtError(e.to_string())
        })?;

        Ok((token, claims))
    }

    /// Checks signature, expiry and role, returning the claims
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        let claims = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            debug!(error = %e, "Failed to decode admin token");
            AppError::JwtError(e.to_string())
        })?;

        if claims.role != ADMIN_ROLE {
            debug!(role = %claims.role, "Token does not carry the admin role");
            return Err(AppError::Unauthorized("Not an admin token".to_string()));
        }

        debug!(session_id = %claims.session_id, exp = claims.exp, "Admin token decoded");
        Ok(claims)
    }
}
