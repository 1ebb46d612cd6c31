use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level CLI configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Base URL of the marketplace API server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for authenticated requests. The `PROMPTDECK_TOKEN`
    /// environment variable takes precedence over this.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Results per page on list endpoints.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}

fn default_page_size() -> u32 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            page_size: default_page_size(),
        }
    }
}

/// Config file path: `~/.config/promptdeck/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("promptdeck").join("config.toml"))
}

/// Load config from file, falling back to defaults if missing.
pub fn load_config() -> AppConfig {
    if let Some(path) = config_path()
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            return config;
        }
        eprintln!(
            "warning: failed to parse config at {}, using defaults",
            path.display()
        );
    }

    AppConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.api_token, None);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn parse_full_config_from_toml() {
        let toml_str = r#"
base_url = "https://api.example.com"
api_token = "tok-123"
page_size = 25
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.api_token.as_deref(), Some("tok-123"));
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn partial_config_fills_remaining_defaults() {
        let config: AppConfig = toml::from_str(r#"base_url = "http://10.0.0.2:9000""#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.page_size, 10);
    }
}
