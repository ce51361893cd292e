//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::constants::{CACHE_DIR_NAME, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::endpoint::CatalogEndpoint;
use crate::env_config::env_parse_with_default;
use crate::error::{CatalogError, Result};

pub const ENV_API_KEY: &str = "ARTSEARCH_API_KEY";
pub const ENV_BASE_URL: &str = "ARTSEARCH_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "ARTSEARCH_TIMEOUT_SECS";
pub const ENV_CACHE_DIR: &str = "ARTSEARCH_CACHE_DIR";

#[derive(Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub cache_dir: PathBuf,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_dir", &self.cache_dir)
            .finish()
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir().unwrap_or_else(|| PathBuf::from(".")).join(CACHE_DIR_NAME)
}

impl Settings {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let timeout = get(ENV_TIMEOUT_SECS);
        Self {
            api_key: get(ENV_API_KEY),
            base_url: get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            timeout_secs: env_parse_with_default(
                ENV_TIMEOUT_SECS,
                timeout.as_deref(),
                DEFAULT_TIMEOUT_SECS,
            ),
            cache_dir: get(ENV_CACHE_DIR).map_or_else(default_cache_dir, PathBuf::from),
        }
    }

    /// Build the catalog endpoint; fails when no API key is configured.
    ///
    /// # Errors
    /// Returns `CatalogError::Config` if `ARTSEARCH_API_KEY` is unset.
    pub fn endpoint(&self) -> Result<CatalogEndpoint> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CatalogError::Config(format!("{ENV_API_KEY} environment variable must be set"))
        })?;
        Ok(CatalogEndpoint::new(self.base_url.as_str(), api_key))
    }
}
