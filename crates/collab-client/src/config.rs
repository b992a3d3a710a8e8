//! Client configuration

use serde::{Deserialize, Serialize};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.opencollab.io/v1/";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL; a missing trailing slash is tolerated
    pub base_url: String,
    /// Request timeout in seconds; `None` keeps the HTTP client's default
    pub timeout_secs: Option<u64>,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: None,
            user_agent: format!("collab-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Load from file
    pub fn load(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Save to file
    pub fn save(&self, path: &str) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, None);
        assert!(config.user_agent.starts_with("collab-client/"));
    }

    #[test]
    fn test_config_roundtrip() {
        let path = std::env::temp_dir().join("collab-client-config-test.json");
        let path = path.to_str().unwrap();

        let mut config = ClientConfig::default();
        config.base_url = "https://staging.opencollab.io/v1/".into();
        config.save(path).unwrap();

        let loaded = ClientConfig::load(path).unwrap();
        assert_eq!(loaded.base_url, config.base_url);
        std::fs::remove_file(path).unwrap();
    }
}
