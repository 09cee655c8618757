use std::sync::Arc;

use sharedrooms::room::repository::InMemoryRoomMembershipStore;
// use sharedrooms::room::repository::PostgresRoomMembershipStore; // For production
use sharedrooms::{router, AppState, JwtAuthenticator, ServerConfig, TokenConfig};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sharedrooms=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting shared-rooms service");

    let config = Arc::new(ServerConfig::from_env());

    // Create shared application state with dependency injection
    // Easy to switch between implementations:
    let room_membership = Arc::new(InMemoryRoomMembershipStore::new());

    // For production with PostgreSQL:
    // let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    // let pool = sqlx::PgPool::connect(&database_url).await.expect("Failed to connect to database");
    // let room_membership = Arc::new(PostgresRoomMembershipStore::new(pool));

    let authenticator = Arc::new(JwtAuthenticator::new(TokenConfig::new()));

    let app_state = AppState::new(config.clone(), authenticator, room_membership);

    let app = router(app_state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap();
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await.unwrap();
}
