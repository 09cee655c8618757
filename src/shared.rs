use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::auth::Authenticator;
use crate::config::ServerConfig;
use crate::room::repository::RoomMembershipStore;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub authenticator: Arc<dyn Authenticator + Send + Sync>,
    pub room_membership: Arc<dyn RoomMembershipStore + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: Arc<ServerConfig>,
        authenticator: Arc<dyn Authenticator + Send + Sync>,
        room_membership: Arc<dyn RoomMembershipStore + Send + Sync>,
    ) -> Self {
        Self {
            config,
            authenticator,
            room_membership,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User directory searching is disabled. Cannot determine shared rooms.")]
    SearchDisabled,

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    #[error("Missing access token")]
    MissingToken,

    #[error("Invalid access token: {0}")]
    UnknownToken(String),

    #[error("You cannot request a list of shared rooms with yourself")]
    SharedRoomsWithSelf,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl AppError {
    /// Machine-readable error code included in every error body
    pub fn errcode(&self) -> &'static str {
        match self {
            AppError::SearchDisabled => "M_UNKNOWN",
            AppError::InvalidUserId(_) => "M_UNKNOWN",
            AppError::MissingToken => "M_MISSING_TOKEN",
            AppError::UnknownToken(_) => "M_UNKNOWN_TOKEN",
            AppError::SharedRoomsWithSelf => "M_FORBIDDEN",
            AppError::DatabaseError(_) => "M_UNKNOWN",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::SearchDisabled => StatusCode::BAD_REQUEST,
            AppError::InvalidUserId(_) => StatusCode::BAD_REQUEST,
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::UnknownToken(_) => StatusCode::UNAUTHORIZED,
            AppError::SharedRoomsWithSelf => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "errcode": self.errcode(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
