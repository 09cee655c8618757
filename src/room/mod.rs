// Public API - what other modules can use
pub use handlers::get_mutual_rooms;

// Internal modules
mod handlers;
pub mod repository;
pub mod types;
