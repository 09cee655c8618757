// Public API - what other modules can use
pub use id::UserId;

// Internal modules
mod id;
