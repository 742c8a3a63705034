//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::images::{DEFAULT_PLACEHOLDER, ImageResolver};
use crate::session::default_session_path;

/// API base used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL must be http or https: {0}")]
    UnsupportedScheme(String),

    #[error("invalid HTTP timeout {0:?}: expected whole seconds")]
    InvalidTimeout(String),
}

/// Settings shared by the API client and every front-end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root including the `/api` prefix, without a trailing `/`.
    pub api_base_url: String,
    /// Image shown when a product has no usable image.
    pub placeholder_image: String,
    /// Where the file token store lives.
    pub session_file: PathBuf,
    /// Per-request timeout. `None` waits indefinitely.
    pub http_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER.to_string(),
            session_file: default_session_path(),
            http_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Reads configuration from environment variables with defaults.
    ///
    /// | Variable                       | Default                               |
    /// |--------------------------------|---------------------------------------|
    /// | `STOREFRONT_API_URL`           | `http://localhost:8080/api`           |
    /// | `STOREFRONT_PLACEHOLDER_IMAGE` | `/placeholder-product.png`            |
    /// | `STOREFRONT_SESSION_FILE`      | `{data_dir}/storefront/session.json`  |
    /// | `STOREFRONT_HTTP_TIMEOUT_SECS` | unset (no timeout)                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup, so
    /// tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = match get("STOREFRONT_API_URL") {
            Some(url) => normalize_api_url(&url)?,
            None => defaults.api_base_url,
        };
        let http_timeout = match get("STOREFRONT_HTTP_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self {
            api_base_url,
            placeholder_image: get("STOREFRONT_PLACEHOLDER_IMAGE")
                .unwrap_or(defaults.placeholder_image),
            session_file: get("STOREFRONT_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            http_timeout,
        })
    }

    /// Override the API URL, validating it the same way the environment is.
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_api_url(url)?;
        Ok(self)
    }

    pub fn image_resolver(&self) -> ImageResolver {
        ImageResolver::new(&self.api_base_url, &self.placeholder_image)
    }
}

/// Validate an API URL and strip trailing slashes.
pub fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
        url: trimmed.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER);
        assert!(config.session_file.ends_with("storefront/session.json"));
        assert!(config.http_timeout.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("STOREFRONT_API_URL", "https://shop.example.vn/api/"),
            ("STOREFRONT_PLACEHOLDER_IMAGE", "/none.png"),
            ("STOREFRONT_SESSION_FILE", "/tmp/s.json"),
            ("STOREFRONT_HTTP_TIMEOUT_SECS", "15"),
        ]))
        .expect("config");
        assert_eq!(config.api_base_url, "https://shop.example.vn/api");
        assert_eq!(config.placeholder_image, "/none.png");
        assert_eq!(config.session_file, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.http_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            ClientConfig::from_lookup(lookup(&[("STOREFRONT_API_URL", "  ")])).expect("config");
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn rejects_bad_urls_and_timeouts() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[("STOREFRONT_API_URL", "not a url")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[("STOREFRONT_API_URL", "ftp://x/api")])),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[("STOREFRONT_HTTP_TIMEOUT_SECS", "0")])),
            Err(ConfigError::InvalidTimeout(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[("STOREFRONT_HTTP_TIMEOUT_SECS", "soon")])),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn resolver_uses_configured_base() {
        let config = ClientConfig::default()
            .with_api_base_url("http://api.local/")
            .expect("url");
        assert_eq!(
            config.image_resolver().resolve(Some("a.png"), "fb"),
            "http://api.local/uploads/a.png"
        );
    }
}
