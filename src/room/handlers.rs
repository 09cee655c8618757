use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use tracing::{info, instrument};

use super::types::MutualRoomsResponse;
use crate::shared::{AppError, AppState};
use crate::user::UserId;

/// HTTP handler for listing rooms shared between the requester and another user
///
/// GET /_matrix/client/unstable/uk.half-shot.msc2666/user/mutual_rooms/{user_id}
/// Returns `{"joined": [...]}` with the room ids both users currently share.
///
/// The steps below run in a fixed order and each failure is terminal: the
/// feature gate is consulted before anything else, the target id is parsed
/// before any credential is looked at, and the requester is authenticated
/// before the self-query check and the membership lookup.
#[instrument(name = "get_mutual_rooms", skip(state, headers))]
pub async fn get_mutual_rooms(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<MutualRoomsResponse>, AppError> {
    if !state.config.user_directory_search_enabled {
        return Err(AppError::SearchDisabled);
    }

    let target = UserId::parse(&user_id)?;

    let requester = state.authenticator.authenticate(&headers).await?;

    if requester.user_id == target {
        return Err(AppError::SharedRoomsWithSelf);
    }

    let joined = state
        .room_membership
        .get_mutual_rooms(requester.user_id.as_str(), target.as_str())
        .await?;

    info!(
        requester = %requester.user_id,
        target = %target,
        mutual_count = joined.len(),
        "Mutual rooms listed successfully"
    );

    Ok(Json(MutualRoomsResponse { joined }))
}
