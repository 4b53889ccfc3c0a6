use serde::{Deserialize, Serialize};

use crate::error::PlotlyResult;

use super::credentials::{Credentials, resolve_credentials};

pub const DEFAULT_BASE_URL: &str = "https://plot.ly/";
pub const DEFAULT_PLATFORM: &str = "rust";
pub const DEFAULT_VERSION: &str = "2.0";
pub const BASE_URL_ENV: &str = "PLOTLY_BASE_URL";

/// Immutable client configuration, resolved once at startup.
///
/// `credentials: None` is the unauthenticated state; the client rejects every
/// remote call in that state without touching the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub credentials: Option<Credentials>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self {
            base_url: default_base_url(),
            platform: default_platform(),
            version: default_version(),
            credentials,
            timeout_secs: None,
        }
    }

    /// Resolves credentials from files and environment, and applies the
    /// `PLOTLY_BASE_URL` override when set.
    pub fn from_env() -> PlotlyResult<Self> {
        let mut config = Self::new(resolve_credentials()?);
        if let Some(base_url) = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
        {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    /// Sets the API root. A trailing `/` is added when missing.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim().to_owned();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_owned()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_owned()
}
