use tracing::info;

/// Process-wide server configuration, read once at startup
///
/// Handlers receive it through `AppState` as a read-only dependency;
/// nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Whether user directory searching is enabled. The mutual rooms
    /// endpoint refuses to serve anything while this is off.
    pub user_directory_search_enabled: bool,
    /// Address the HTTP server binds to
    pub bind_addr: String,
}

impl ServerConfig {
    /// Builds the configuration from environment variables, falling back
    /// to deployment defaults
    pub fn from_env() -> Self {
        let user_directory_search_enabled = std::env::var("USER_DIRECTORY_SEARCH_ENABLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        info!(
            user_directory_search_enabled,
            bind_addr = %bind_addr,
            "Loaded server configuration"
        );

        Self {
            user_directory_search_enabled,
            bind_addr,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            user_directory_search_enabled: true,
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_directory_search() {
        let config = ServerConfig::default();
        assert!(config.user_directory_search_enabled);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }
}
