pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const BIND_ENV_VAR: &str = "USERS_API_BIND";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl ServerConfig {
    /// Defaults, with `USERS_API_BIND` overriding the bind address when set.
    pub fn from_env() -> Self {
        Self::from_bind_override(std::env::var(BIND_ENV_VAR).ok())
    }

    fn from_bind_override(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(address) if !address.is_empty() => Self {
                bind_address: address,
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listens_on_3000() {
        assert_eq!(ServerConfig::default().bind_address, "0.0.0.0:3000");
    }

    #[test]
    fn test_bind_override() {
        let config = ServerConfig::from_bind_override(Some("127.0.0.1:8080".to_string()));
        assert_eq!(config.bind_address, "127.0.0.1:8080");

        let config = ServerConfig::from_bind_override(Some("  ".to_string()));
        assert_eq!(config, ServerConfig::default());

        assert_eq!(ServerConfig::from_bind_override(None), ServerConfig::default());
    }
}
