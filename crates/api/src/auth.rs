//! Bearer JWTs and the admin gate for write routes.
//!
//! Tokens are HS256 JWTs carrying `{ "username", "isAdmin" }`. They have no
//! expiry claim, so none is required when verifying.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// What a token says about its bearer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid token: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation
}

/// Sign `claims` with `secret`.
pub fn create_token(secret: &str, claims: &Claims) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::new(Algorithm::HS256), claims, &key)?)
}

/// Check the signature of `token` and return its claims.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    Ok(decode::<Claims>(token, &key, &validation())?.claims)
}

/// Extractor that only succeeds for a valid admin token.
///
/// Rejects with 401 when the `Authorization: Bearer` header is missing, the
/// token does not verify, or the bearer is not an admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or(ApiError::Unauthorized)?;

        let claims = verify_token(&state.secret_key, token).map_err(|err| {
            warn!(error = %err, "rejected bearer token");
            ApiError::Unauthorized
        })?;

        if !claims.is_admin {
            warn!(username = %claims.username, "non-admin on admin route");
            return Err(ApiError::Unauthorized);
        }

        Ok(AdminUser(claims))
    }
}
