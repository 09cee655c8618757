use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use sharedrooms::{
    router, AppState, InMemoryRoomMembershipStore, JwtAuthenticator, ServerConfig, TokenConfig,
    UserId,
};
use tower::ServiceExt; // for `oneshot`

/// A fully wired service instance backed by the in-memory membership store
/// and the real JWT authenticator
pub struct TestSetup {
    pub app: Router,
    pub store: Arc<InMemoryRoomMembershipStore>,
    token_config: TokenConfig,
}

impl TestSetup {
    /// Mints a valid bearer token for the given user
    pub fn token_for(&self, user_id: &str) -> String {
        let user_id = UserId::parse(user_id).expect("test user id should be valid");
        self.token_config
            .create_token(&user_id)
            .expect("token creation should succeed")
    }

    /// Sends a mutual-rooms request authenticated as `requester` against `target`
    pub async fn get_mutual_rooms(&self, requester: &str, target: &str) -> Response<Body> {
        let token = self.token_for(requester);
        let request = Request::builder()
            .method("GET")
            .uri(mutual_rooms_uri(target))
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Sends a mutual-rooms request without any credentials
    pub async fn get_mutual_rooms_unauthenticated(&self, target: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(mutual_rooms_uri(target))
            .body(Body::empty())
            .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }
}

pub fn mutual_rooms_uri(target: &str) -> String {
    format!(
        "/_matrix/client/unstable/uk.half-shot.msc2666/user/mutual_rooms/{}",
        target
    )
}

/// Builder for test setups with configuration overrides
pub struct TestSetupBuilder {
    user_directory_search_enabled: bool,
    memberships: Vec<(String, String)>, // (room_id, user_id)
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            user_directory_search_enabled: true,
            memberships: Vec::new(),
        }
    }

    pub fn with_directory_search_disabled(mut self) -> Self {
        self.user_directory_search_enabled = false;
        self
    }

    pub fn with_member(mut self, room_id: &str, user_id: &str) -> Self {
        self.memberships
            .push((room_id.to_string(), user_id.to_string()));
        self
    }

    pub fn build(self) -> TestSetup {
        let config = ServerConfig {
            user_directory_search_enabled: self.user_directory_search_enabled,
            ..ServerConfig::default()
        };

        let store = Arc::new(InMemoryRoomMembershipStore::new());
        for (room_id, user_id) in &self.memberships {
            store.add_member(room_id, user_id);
        }

        let token_config = TokenConfig::new();
        let authenticator = Arc::new(JwtAuthenticator::new(token_config.clone()));

        let app_state = AppState::new(Arc::new(config), authenticator, store.clone());

        TestSetup {
            app: router(app_state),
            store,
            token_config,
        }
    }
}

impl Default for TestSetupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
