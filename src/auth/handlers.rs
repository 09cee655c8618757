use axum::Json;
use tracing::{info, instrument};

use super::token::TokenConfig;
use super::types::{TokenRequest, TokenResponse};
use crate::shared::AppError;
use crate::user::UserId;

/// HTTP handler for minting a development access token
///
/// POST /_local/token
/// Accepts a user id and returns a signed bearer token for it. This is a
/// development aid; a production deployment fronts the endpoint with its
/// real login flow instead.
#[instrument(name = "mint_token", skip(request))]
pub async fn mint_token(
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user_id = UserId::parse(&request.user_id)?;

    let token_config = TokenConfig::new();
    let access_token = token_config.create_token(&user_id)?;

    info!(user_id = %user_id, "Minted development access token");

    Ok(Json(TokenResponse {
        access_token,
        user_id: user_id.to_string(),
    }))
}
