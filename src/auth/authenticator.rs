use async_trait::async_trait;
use axum::http::HeaderMap;
use tracing::{info, instrument, warn};

use super::token::TokenConfig;
use super::types::Requester;
use crate::shared::AppError;
use crate::user::UserId;

/// Capability for resolving request credentials to an authenticated caller
///
/// Handlers call this themselves rather than relying on a middleware layer:
/// the mutual rooms endpoint must run its feature gate and path validation
/// before any credential is looked at, and a layer would run first.
#[async_trait]
pub trait Authenticator {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Requester, AppError>;
}

/// Authenticator validating `Authorization: Bearer` JWT access tokens
pub struct JwtAuthenticator {
    token_config: TokenConfig,
}

impl JwtAuthenticator {
    pub fn new(token_config: TokenConfig) -> Self {
        Self { token_config }
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    #[instrument(skip(self, headers))]
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Requester, AppError> {
        // Extract token from Authorization Bearer header
        let auth_header = headers
            .get("Authorization")
            .and_then(|header| header.to_str().ok())
            .ok_or_else(|| {
                warn!("Missing Authorization header in request");
                AppError::MissingToken
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Invalid Authorization header format (expected Bearer token)");
            AppError::UnknownToken("Invalid Authorization header format".to_string())
        })?;

        let claims = self.token_config.validate_token(token)?;

        // Tokens are minted against the same grammar, but a stale or foreign
        // token could carry anything in its subject
        let user_id = UserId::parse(&claims.sub)
            .map_err(|_| AppError::UnknownToken("Token subject is not a user id".to_string()))?;

        info!(user_id = %user_id, "Authentication successful");

        Ok(Requester { user_id })
    }
}
