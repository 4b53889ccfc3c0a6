//! Request and response envelopes exchanged with the service.

use serde::{Deserialize, Serialize};

use crate::core::{Figure, Layout};
use crate::error::{PlotlyError, PlotlyResult};

use super::credentials::Credentials;

pub const CREATE_PATH: &str = "clientresp";
pub const FETCH_PATH: &str = "apigetfile/";
pub const IMAGE_PATH: &str = "apigenimage/";

/// Origin tag sent with chart creation.
pub const CREATE_ORIGIN: &str = "plot";
pub const FILEOPT_OVERWRITE: &str = "overwrite";

/// Form-encoded chart creation request.
#[derive(Debug, Clone, Copy)]
pub struct CreateRequest<'a> {
    pub credentials: &'a Credentials,
    pub platform: &'a str,
    pub version: &'a str,
    pub filename: &'a str,
    pub figure: &'a Figure,
    pub world_readable: bool,
}

#[derive(Debug, Serialize)]
struct CreateKwargs<'a> {
    filename: &'a str,
    fileopt: &'static str,
    world_readable: bool,
    layout: &'a Layout,
}

impl CreateRequest<'_> {
    /// Form fields in the order the service documents them. `args` is the JSON
    /// array of traces, `kwargs` the JSON options object.
    pub fn form_fields(&self) -> PlotlyResult<Vec<(String, String)>> {
        let args = serde_json::to_string(&self.figure.data)
            .map_err(|e| PlotlyError::encode("chart traces", e))?;
        let kwargs = serde_json::to_string(&CreateKwargs {
            filename: self.filename,
            fileopt: FILEOPT_OVERWRITE,
            world_readable: self.world_readable,
            layout: &self.figure.layout,
        })
        .map_err(|e| PlotlyError::encode("chart options", e))?;

        Ok(vec![
            ("un".to_owned(), self.credentials.username.clone()),
            ("key".to_owned(), self.credentials.api_key.clone()),
            ("origin".to_owned(), CREATE_ORIGIN.to_owned()),
            ("platform".to_owned(), self.platform.to_owned()),
            ("version".to_owned(), self.version.to_owned()),
            ("args".to_owned(), args),
            ("kwargs".to_owned(), kwargs),
        ])
    }
}

/// Error, warning and informational text common to every response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceStatus {
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|text| !text.is_empty())
    }

    #[must_use]
    pub fn into_error(self) -> PlotlyError {
        PlotlyError::remote(self.error.as_deref(), self.warning.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub filename: String,
    #[serde(flatten)]
    pub status: ServiceStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FetchPayload {
    #[serde(default, deserialize_with = "crate::core::null_as_default")]
    pub figure: Figure,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FetchResponse {
    #[serde(default)]
    pub payload: Option<FetchPayload>,
    #[serde(flatten)]
    pub status: ServiceStatus,
}

/// JSON body of an image render request.
#[derive(Debug, Serialize)]
pub struct ImageRequest<'a> {
    pub figure: &'a Figure,
}

pub fn decode_response<'a, T: Deserialize<'a>>(
    body: &'a [u8],
    context: &str,
) -> PlotlyResult<T> {
    serde_json::from_slice(body).map_err(|e| PlotlyError::decode(context, e))
}
