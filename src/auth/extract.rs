//! Request extractors gating protected routes.
//!
//! Rejections fire before the handler body runs, so admin-only routes refuse
//! unauthorized callers before touching the cache or the database.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::AppState;
use crate::auth::AuthClaims;
use crate::error::ApiError;

/// Extractor for any authenticated caller.
pub struct AuthUser(pub AuthClaims);

impl std::ops::Deref for AuthUser {
    type Target = AuthClaims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Extractor for admin-only routes. Rejects with 401 when the token is
/// missing or invalid and 403 when the caller is not an admin.
pub struct AdminUser(pub AuthClaims);

impl std::ops::Deref for AdminUser {
    type Target = AuthClaims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.tokens.verify(token)?;
        Ok(AuthUser(claims))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        if !claims.is_admin {
            return Err(ApiError::Forbidden(
                "Admin privileges required".to_string(),
            ));
        }

        Ok(AdminUser(claims))
    }
}
