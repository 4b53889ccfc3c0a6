use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlotlyError, PlotlyResult};

pub const USERNAME_ENV: &str = "PLOTLY_USERNAME";
pub const APIKEY_ENV: &str = "PLOTLY_APIKEY";

const CREDENTIAL_FILE_NAMES: [&str; 2] = [".plotly_credentials.json", "plotly_credentials.json"];

/// Username and API key for the service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(alias = "Username", default)]
    pub username: String,
    #[serde(
        rename = "apikey",
        alias = "Apikey",
        alias = "api_key",
        default,
        skip_serializing
    )]
    pub api_key: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Both values are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.api_key.is_empty()
    }

    pub fn from_file(path: &Path) -> PlotlyResult<Self> {
        let raw = fs::read(path).map_err(|source| PlotlyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|e| PlotlyError::Credentials {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Credential file locations, highest precedence first.
#[must_use]
pub fn credential_search_paths() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from(".")];
    if let Some(home) = dirs::home_dir() {
        roots.push(home);
    }
    roots.push(PathBuf::from("/etc/plotly"));

    roots
        .iter()
        .flat_map(|dir| CREDENTIAL_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .collect()
}

/// Resolves credentials from the default file locations and the process
/// environment.
pub fn resolve_credentials() -> PlotlyResult<Option<Credentials>> {
    resolve_credentials_from(&credential_search_paths(), |key| std::env::var(key).ok())
}

/// Resolves credentials from `paths` (highest precedence first) and `env`.
///
/// The first existing file wins over the environment. A winning source that
/// does not provide both values yields `Ok(None)`, i.e. unauthenticated. A file
/// that exists but cannot be parsed is an error.
pub fn resolve_credentials_from(
    paths: &[PathBuf],
    env: impl Fn(&str) -> Option<String>,
) -> PlotlyResult<Option<Credentials>> {
    let resolved = match paths.iter().find(|path| path.is_file()) {
        Some(path) => {
            debug!(path = %path.display(), "loading plotly credentials file");
            Credentials::from_file(path)?
        }
        None => Credentials::new(
            env(USERNAME_ENV).unwrap_or_default(),
            env(APIKEY_ENV).unwrap_or_default(),
        ),
    };

    Ok(resolved.is_complete().then_some(resolved))
}
