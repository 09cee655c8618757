use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::shared::AppError;

/// Capability for computing room membership shared between two users
///
/// The returned collection is unordered; callers render it in whatever
/// order the store yields and impose no sorting of their own. What counts
/// as "shared" (currently joined, on the same homeserver, etc.) is this
/// store's business.
#[async_trait]
pub trait RoomMembershipStore {
    async fn get_mutual_rooms(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Vec<String>, AppError>;
}

/// In-memory implementation of RoomMembershipStore for development and testing
///
/// This provides a realistic implementation that can be used in development
/// without requiring a real database connection. Membership is stored in
/// memory and will be lost when the application restarts.
pub struct InMemoryRoomMembershipStore {
    // room_id -> joined members
    rooms: Mutex<HashMap<String, HashSet<String>>>,
}

impl Default for InMemoryRoomMembershipStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomMembershipStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    /// Records a user as joined to a room
    pub fn add_member(&self, room_id: &str, user_id: &str) {
        let mut rooms = self.rooms.lock().unwrap();
        rooms
            .entry(room_id.to_string())
            .or_default()
            .insert(user_id.to_string());
    }

    /// Removes a user from a room
    pub fn remove_member(&self, room_id: &str, user_id: &str) {
        let mut rooms = self.rooms.lock().unwrap();
        if let Some(members) = rooms.get_mut(room_id) {
            members.remove(user_id);
        }
    }

    /// Returns the current number of rooms in the store
    pub fn room_count(&self) -> usize {
        self.rooms.lock().unwrap().len()
    }
}

#[async_trait]
impl RoomMembershipStore for InMemoryRoomMembershipStore {
    #[instrument(skip(self))]
    async fn get_mutual_rooms(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Vec<String>, AppError> {
        debug!(user_a = %user_a, user_b = %user_b, "Computing mutual rooms in memory");

        let rooms = self.rooms.lock().unwrap();
        let mutual = rooms
            .iter()
            .filter(|(_, members)| members.contains(user_a) && members.contains(user_b))
            .map(|(room_id, _)| room_id.clone())
            .collect::<Vec<_>>();

        debug!(mutual_count = mutual.len(), "Mutual rooms computed");
        Ok(mutual)
    }
}

/// PostgreSQL implementation of RoomMembershipStore for production
pub struct PostgresRoomMembershipStore {
    pool: PgPool,
}

impl PostgresRoomMembershipStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomMembershipStore for PostgresRoomMembershipStore {
    #[instrument(skip(self))]
    async fn get_mutual_rooms(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Vec<String>, AppError> {
        debug!(user_a = %user_a, user_b = %user_b, "Computing mutual rooms in database");

        let rows = sqlx::query(
            "SELECT m1.room_id FROM room_memberships m1 \
             JOIN room_memberships m2 ON m1.room_id = m2.room_id \
             WHERE m1.user_id = $1 AND m2.user_id = $2 \
               AND m1.membership = 'join' AND m2.membership = 'join'",
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to compute mutual rooms in database");
            AppError::DatabaseError(e.to_string())
        })?;

        let mut mutual = Vec::with_capacity(rows.len());
        for row in rows {
            let room_id: String = row
                .try_get("room_id")
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            mutual.push(room_id);
        }

        debug!(mutual_count = mutual.len(), "Mutual rooms computed");
        Ok(mutual)
    }
}
