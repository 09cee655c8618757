// Public API - what other modules can use
pub use authenticator::{Authenticator, JwtAuthenticator};
pub use handlers::mint_token;
pub use token::TokenConfig;
pub use types::{AccessClaims, Requester};

// Internal modules
mod authenticator;
mod handlers;
mod token;
mod types;
