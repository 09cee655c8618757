use serde::{Deserialize, Serialize};

/// Response for the mutual rooms endpoint
///
/// `joined` carries the room ids both users currently share, in the order
/// the membership store returned them.
#[derive(Debug, Serialize, Deserialize)]
pub struct MutualRoomsResponse {
    pub joined: Vec<String>,
}
