/// Server configuration
use crate::error::{Result, ServerError};
use podcastr_content_client::ContentConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_content")]
    pub content: ContentSettings,

    #[serde(default = "default_pages")]
    pub pages: PageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentSettings {
    #[serde(default = "default_content_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ContentSettings {
    pub fn client_config(&self) -> ContentConfig {
        ContentConfig::new(self.url.clone()).with_timeout(self.timeout_secs)
    }
}

/// Page generation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageSettings {
    /// Episodes fetched for the home page
    #[serde(default = "default_home_limit")]
    pub home_limit: usize,

    /// Episodes featured as latest (and prebuilt as detail pages)
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,

    #[serde(default = "default_home_revalidate_secs")]
    pub home_revalidate_secs: u64,

    #[serde(default = "default_episode_revalidate_secs")]
    pub episode_revalidate_secs: u64,
}

impl PageSettings {
    pub fn home_revalidate(&self) -> Duration {
        Duration::from_secs(self.home_revalidate_secs)
    }

    pub fn episode_revalidate(&self) -> Duration {
        Duration::from_secs(self.episode_revalidate_secs)
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` (or `podcastr.toml` when present), then applies
    /// `PODCASTR_*` overrides such as `PODCASTR_CONTENT__URL`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PODCASTR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml(text: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.content.url.is_empty() {
            return Err(ServerError::Config(
                "Content URL is required (set PODCASTR_CONTENT__URL)".to_string(),
            ));
        }

        if self.pages.home_limit == 0 || self.pages.latest_count == 0 {
            return Err(ServerError::Config(
                "Page limits must be greater than zero".to_string(),
            ));
        }

        if self.pages.latest_count > self.pages.home_limit {
            return Err(ServerError::Config(format!(
                "latest_count ({}) cannot exceed home_limit ({})",
                self.pages.latest_count, self.pages.home_limit
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_content() -> ContentSettings {
    ContentSettings {
        url: default_content_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_content_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_secs() -> u64 {
    podcastr_content_client::DEFAULT_TIMEOUT_SECS
}

fn default_pages() -> PageSettings {
    PageSettings {
        home_limit: default_home_limit(),
        latest_count: default_latest_count(),
        home_revalidate_secs: default_home_revalidate_secs(),
        episode_revalidate_secs: default_episode_revalidate_secs(),
    }
}

fn default_home_limit() -> usize {
    podcastr_content_client::DEFAULT_LIMIT
}

fn default_latest_count() -> usize {
    2
}

fn default_home_revalidate_secs() -> u64 {
    60 * 60 * 8
}

fn default_episode_revalidate_secs() -> u64 {
    60 * 60 * 24
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            content: default_content(),
            pages: default_pages(),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        default_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.pages.home_limit, 12);
        assert_eq!(config.pages.latest_count, 2);
        assert_eq!(config.pages.home_revalidate(), Duration::from_secs(28_800));
        assert_eq!(config.pages.episode_revalidate(), Duration::from_secs(86_400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml(
            r#"
            [content]
            url = "http://content.internal:4000"

            [pages]
            home_limit = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.content.url, "http://content.internal:4000");
        assert_eq!(config.content.timeout_secs, 30);
        assert_eq!(config.pages.home_limit, 6);
        assert_eq!(config.pages.latest_count, 2);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut config = ServerConfig::default();
        config.content.url.clear();
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = ServerConfig::default();
        config.pages.home_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_latest_over_limit() {
        let mut config = ServerConfig::default();
        config.pages.home_limit = 1;
        config.pages.latest_count = 2;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("latest_count"));
    }

    #[test]
    fn test_client_config() {
        let settings = ContentSettings {
            url: "http://localhost:9999".to_string(),
            timeout_secs: 5,
        };
        let client = settings.client_config();
        assert_eq!(client.url, "http://localhost:9999");
        assert_eq!(client.timeout_secs, 5);
    }
}
