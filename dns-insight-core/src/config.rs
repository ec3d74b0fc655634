//! Dashboard configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! stale_responses = "discard"
//!
//! [api]
//! base_url = "http://127.0.0.1:8080"
//! connect_timeout_secs = 10
//! request_timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PanelError, PanelResult};

/// Environment variable overriding `api.base_url`
pub const API_BASE_ENV: &str = "DNS_INSIGHT_API_BASE";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// What to do with a response that is no longer the latest request of its pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Drop responses superseded by a newer request
    #[default]
    Discard,
    /// Render every response; the last one to arrive wins
    LastArrivalWins,
}

/// Search API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin the relative API paths are resolved against
    pub base_url: String,
    /// `None` disables the connect timeout
    pub connect_timeout_secs: Option<u64>,
    /// `None` disables the request timeout
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            connect_timeout_secs: Some(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Parsed and validated base URL
    pub fn base(&self) -> PanelResult<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            PanelError::InvalidConfig(format!("api.base_url '{}': {e}", self.base_url))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(PanelError::InvalidConfig(format!(
                "api.base_url must use http or https, got '{other}'"
            ))),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub stale_responses: StaleResponsePolicy,
}

impl DashboardConfig {
    /// Default location: `<config_dir>/dns-insight/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dns-insight").join("config.toml"))
    }

    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> PanelResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| PanelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path; the file must exist
    pub fn load(path: &Path) -> PanelResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PanelError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> PanelResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default_path) if default_path.exists() => {
                log::info!("Loading config from {}", default_path.display());
                Self::load(&default_path)
            }
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> PanelResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(API_BASE_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("{API_BASE_ENV} overrides api.base_url");
            self.api.base_url = base_url.trim().to_string();
        }
        self.validate()
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> PanelResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn validate(&self) -> PanelResult<()> {
        self.api.base().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.stale_responses, StaleResponsePolicy::Discard);
        assert_eq!(config.api.connect_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(30)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_document() {
        let config = DashboardConfig::from_toml_str(
            r#"
            stale_responses = "last_arrival_wins"

            [api]
            base_url = "https://dns.example.com"
            request_timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.stale_responses, StaleResponsePolicy::LastArrivalWins);
        assert_eq!(config.api.base_url, "https://dns.example.com");
        assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(5)));
        // unspecified fields keep their defaults
        assert_eq!(config.api.connect_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(
            DashboardConfig::from_toml_str("").unwrap(),
            DashboardConfig::default()
        );
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = DashboardConfig::from_toml_str(r#"stale_responses = "first_wins""#);
        assert!(matches!(result, Err(PanelError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_http_base() {
        let result = DashboardConfig::from_toml_str(
            r#"
            [api]
            base_url = "ftp://dns.example.com"
            "#,
        );
        assert!(matches!(result, Err(PanelError::InvalidConfig(msg)) if msg.contains("ftp")));
    }

    #[test]
    fn rejects_relative_base() {
        let result = DashboardConfig::from_toml_str(
            r#"
            [api]
            base_url = "/api"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn override_replaces_base_url() {
        let mut config = DashboardConfig::default();
        config
            .apply_overrides(|key| {
                (key == API_BASE_ENV).then(|| " https://override.example.com ".to_string())
            })
            .unwrap();
        assert_eq!(config.api.base_url, "https://override.example.com");
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = DashboardConfig::default();
        config.apply_overrides(|_| Some("   ".to_string())).unwrap();
        assert_eq!(config.api.base_url, ApiConfig::default().base_url);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let mut config = DashboardConfig::default();
        let result = config.apply_overrides(|_| Some("not a url".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://10.0.0.1:9000\"").unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.1:9000");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = DashboardConfig::load_or_default(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(PanelError::InvalidConfig(msg)) if msg.contains("cannot read")));
    }
}
