use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_coaches_endpoint")]
    pub coaches_endpoint: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Demo credential the login flow checks against; configuration, not a
/// literal in the login component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,

    #[serde(default = "default_password")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_coaches_endpoint() -> String {
    "/coaches".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_id() -> String {
    "UI-001".to_string()
}

fn default_password() -> String {
    "user@123".to_string()
}

fn default_date_format() -> String {
    "%a %b %d %Y".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            coaches_endpoint: default_coaches_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            password: default_password(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.wecare/)
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(test_dir) = std::env::var("WECARE_CONFIG_DIR") {
            return Ok(PathBuf::from(test_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".wecare"))
    }

    /// Get config file path (~/.wecare/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_file = Self::config_file()?;

        if !config_file.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

        let config_file = Self::config_file()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Full URL of the coaches resource
    pub fn coaches_url(&self) -> String {
        format!("{}{}", self.api.base_url, self.api.coaches_endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.coaches_endpoint, "/coaches");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.auth.user_id, "UI-001");
        assert_eq!(config.auth.password, "user@123");
    }

    #[test]
    fn test_coaches_url() {
        let config = Config::default();
        assert_eq!(config.coaches_url(), "http://localhost:3000/api/coaches");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.api.base_url, deserialized.api.base_url);
        assert_eq!(config.auth.password, deserialized.auth.password);
        assert_eq!(config.ui.date_format, deserialized.ui.date_format);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[api]\nbase_url = \"https://wecare.example.com/api\"\n").unwrap();

        assert_eq!(config.api.base_url, "https://wecare.example.com/api");
        assert_eq!(config.api.coaches_endpoint, "/coaches");
        assert_eq!(config.auth.password, "user@123");
    }
}
