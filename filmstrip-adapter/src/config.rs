use core::fmt;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::HeaderValue;

use crate::{GalleryError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.pexels.com/v1/search";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "PEXELS_API_KEY"];
pub const ENDPOINT_VAR: &str = "FILMSTRIP_ENDPOINT";
pub const TIMEOUT_VAR: &str = "FILMSTRIP_TIMEOUT_SECS";

/// The fixed search the gallery runs on mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub orientation: String,
    pub size: String,
    pub per_page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: "nature".to_owned(),
            orientation: "portrait".to_owned(),
            size: "small".to_owned(),
            per_page: 20,
        }
    }
}

impl SearchQuery {
    /// Query-string pairs, in request order.
    pub fn params(&self) -> [(&'static str, String); 4] {
        [
            ("query", self.query.clone()),
            ("orientation", self.orientation.clone()),
            ("size", self.size.clone()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// Where and how to fetch photos.
///
/// The API key is kept as a sensitive header value and never printed by `Debug`.
#[derive(Clone)]
pub struct SourceConfig {
    api_key: HeaderValue,
    endpoint: Url,
    query: SearchQuery,
    timeout: Duration,
}

impl SourceConfig {
    pub fn new(api_key: impl AsRef<str>) -> Result<Self> {
        let api_key = api_key.as_ref().trim();
        if api_key.is_empty() {
            return Err(GalleryError::configuration("API key is empty"));
        }
        let mut api_key = HeaderValue::from_str(api_key).map_err(|_| {
            GalleryError::configuration("API key contains characters not allowed in a header")
        })?;
        api_key.set_sensitive(true);
        let endpoint = Url::parse(DEFAULT_ENDPOINT)
            .map_err(|e| GalleryError::configuration(format!("default endpoint: {e}")))?;
        Ok(Self {
            api_key,
            endpoint,
            query: SearchQuery::default(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup` (variable name -> value).
    ///
    /// The API key comes from the first non-empty of [`API_KEY_VARS`]; [`ENDPOINT_VAR`] and
    /// [`TIMEOUT_VAR`] are optional overrides.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(*name))
            .find(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                GalleryError::configuration(format!(
                    "no API key set (looked at {})",
                    API_KEY_VARS.join(", ")
                ))
            })?;

        let mut config = Self::new(api_key)?;
        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            config = config.with_endpoint(&endpoint)?;
        }
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                GalleryError::configuration(format!(
                    "{TIMEOUT_VAR} is not a whole number: {secs:?}"
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Url::parse(endpoint.trim()).map_err(|e| {
            GalleryError::configuration(format!("invalid endpoint {endpoint:?}: {e}"))
        })?;
        Ok(self)
    }

    pub fn with_query(mut self, query: SearchQuery) -> Self {
        self.query = query;
        self
    }

    /// A zero timeout is raised to one second.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(Duration::from_secs(1));
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn api_key(&self) -> &HeaderValue {
        &self.api_key
    }
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .field("query", &self.query)
            .field("timeout", &self.timeout)
            .finish()
    }
}
