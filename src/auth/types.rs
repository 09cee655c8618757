use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// JWT claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Canonical user identifier the token was issued for
    pub sub: String,
    pub exp: usize, // Expiration timestamp (standard JWT claim)
    pub iat: usize, // Issued at timestamp (standard JWT claim)
}

/// The authenticated caller of a request
///
/// Built fresh from request credentials on every request and discarded
/// when the request completes; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Requester {
    pub user_id: UserId,
}

/// Request payload for minting a development access token
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub user_id: String,
}

/// Response for the development token mint endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_serialization() {
        let claims = AccessClaims {
            sub: "@alice:example.org".to_string(),
            exp: 1234567890,
            iat: 1234567800,
        };

        // Should serialize to JSON
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("@alice:example.org"));

        // Should deserialize from JSON
        let deserialized: AccessClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, claims);
    }

    #[test]
    fn test_token_response_serialization() {
        let response = TokenResponse {
            access_token: "jwt-token-here".to_string(),
            user_id: "@bob:example.org".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("jwt-token-here"));
        assert!(json.contains("@bob:example.org"));
    }
}
