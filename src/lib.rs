// Library crate for the shared-rooms service
// This file exposes the public API for integration tests

pub mod auth;
pub mod config;
pub mod room;
pub mod shared;
pub mod user;

// Re-export commonly used types for easier access in tests
pub use auth::{Authenticator, JwtAuthenticator, Requester, TokenConfig};
pub use config::ServerConfig;
pub use room::repository::{InMemoryRoomMembershipStore, RoomMembershipStore};
pub use shared::{AppError, AppState};
pub use user::UserId;

use axum::{
    routing::{get, post},
    Router,
};

/// Path of the mutual rooms endpoint
///
/// The route lives under the unstable namespace: it is an experimental
/// feature and is not advertised under any stable release prefix.
pub const MUTUAL_ROOMS_ROUTE: &str =
    "/_matrix/client/unstable/uk.half-shot.msc2666/user/mutual_rooms/:user_id";

/// Builds the service router over the given application state
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(MUTUAL_ROOMS_ROUTE, get(room::get_mutual_rooms))
        .route("/_local/token", post(auth::mint_token))
        .with_state(app_state)
}
