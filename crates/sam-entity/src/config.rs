//! Endpoint configuration.
//!
//! Production callers use [`EntityApiConfig::production`]. Staging hosts,
//! proxies, and local mock servers go through [`EntityApiConfig::new`]. The
//! config never holds an API key; callers attach it to the query string of
//! [`EntityApiConfig::endpoint`] themselves.

use url::Url;

use crate::api;

/// Where the SAM Entity API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityApiConfig {
    /// Scheme, host, and optional path prefix. Always ends in `/`.
    pub base_url: Url,
}

impl EntityApiConfig {
    /// Configuration pointing at `https://api.sam.gov/`.
    pub fn production() -> Result<Self, ConfigError> {
        Self::new(&format!("{}://{}/", api::API_SCHEME, api::API_HOST))
    }

    /// Configuration pointing at an explicit base URL.
    ///
    /// A path prefix is kept: `http://127.0.0.1:9000/sam` resolves the
    /// endpoint to `http://127.0.0.1:9000/sam/entity-information/v2/entities`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `raw` does not parse or cannot
    /// serve as a base (e.g. `mailto:` URLs).
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let mut base_url =
            Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(
                raw.to_string(),
                "URL cannot be a base".to_string(),
            ));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self { base_url })
    }

    /// The entities endpoint under this base.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        self.base_url
            .join(api::API_PATH)
            .map_err(|e| ConfigError::InvalidUrl(self.base_url.to_string(), e.to_string()))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL {0}: {1}")]
    InvalidUrl(String, String),
}
