use std::fmt;

use serde::{Deserialize, Serialize};

/// URL of a chart stored by the service, e.g. `https://plot.ly/~user/42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartUrl(String);

impl ChartUrl {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Chart id: the fifth `/`-separated segment.
    ///
    /// Returns an empty string unless the URL splits into exactly five segments.
    #[must_use]
    pub fn id(&self) -> &str {
        let segments: Vec<&str> = self.0.split('/').collect();
        match segments.as_slice() {
            [_, _, _, _, id] => *id,
            _ => "",
        }
    }
}

impl fmt::Display for ChartUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ChartUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}
