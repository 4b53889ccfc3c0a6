use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::{ArrayValue, BarChartTitles, ChartUrl, Figure, stacked_bar_figure};
use crate::error::{PlotlyError, PlotlyResult};

use super::config::ClientConfig;
use super::credentials::Credentials;
use super::transport::{
    HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, RequestBody, Transport,
};
use super::wire::{
    CREATE_PATH, CreateRequest, CreateResponse, FETCH_PATH, FetchResponse, IMAGE_PATH,
    ImageRequest, ServiceStatus, decode_response,
};

/// Result of [`PlotlyClient::save_chart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedChart {
    pub url: ChartUrl,
    pub filename: String,
}

/// Blocking client for the chart service.
///
/// Every operation is one request. Without credentials in the config, every
/// operation fails with [`PlotlyError::NoCredentials`] before the transport is
/// called.
#[derive(Debug)]
pub struct PlotlyClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl PlotlyClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> PlotlyResult<Self> {
        let transport = ReqwestTransport::new(config.timeout_secs.map(Duration::from_secs))?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> PlotlyClient<T> {
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Creates (or overwrites) the chart stored under `filename`.
    ///
    /// `filename` may include folders (`reports/q3`).
    pub fn create_chart(
        &self,
        filename: &str,
        figure: &Figure,
        world_readable: bool,
    ) -> PlotlyResult<ChartUrl> {
        let created = self.post_chart(filename, figure, world_readable)?;
        Ok(created.url)
    }

    /// Stores a world-readable chart and returns both its URL and the filename
    /// the service assigned.
    pub fn save_chart(&self, filename: &str, figure: &Figure) -> PlotlyResult<SavedChart> {
        self.post_chart(filename, figure, true)
    }

    /// Fetches a stored chart of the configured user by id.
    pub fn fetch_chart(&self, id: &str) -> PlotlyResult<Figure> {
        self.fetch_with_status(id).map(|(figure, _)| figure)
    }

    /// Renders `figure` to PNG and writes the image bytes to `output`.
    pub fn render_image(&self, figure: &Figure, output: &Path) -> PlotlyResult<()> {
        let credentials = self.credentials()?;
        let body = serde_json::to_vec(&ImageRequest { figure })
            .map_err(|e| PlotlyError::encode("image request", e))?;
        let response = self.send(HttpRequest {
            method: HttpMethod::Post,
            url: self.config.endpoint(IMAGE_PATH),
            headers: self.auth_headers(credentials),
            body: RequestBody::Json(body),
        })?;

        if !response.is_success() {
            let status: ServiceStatus =
                decode_response(&response.body, "image error response").unwrap_or_default();
            return Err(self.remote_failure(status));
        }

        fs::write(output, &response.body).map_err(|source| PlotlyError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        debug!(path = %output.display(), bytes = response.body.len(), "wrote chart image");
        Ok(())
    }

    /// Fetches the chart `id` and renders it to `output`.
    ///
    /// A fetched chart without traces is reported as a remote failure carrying
    /// the fetch response's warning, if any.
    pub fn download_image(&self, id: &str, output: &Path) -> PlotlyResult<()> {
        let (figure, status) = self.fetch_with_status(id)?;
        if figure.data.is_empty() {
            return Err(self.remote_failure(status));
        }
        self.render_image(&figure, output)
    }

    /// Builds a stacked bar chart (see [`stacked_bar_figure`]) and creates it.
    pub fn create_stacked_bar_chart(
        &self,
        filename: &str,
        categories: &[String],
        colors: &[String],
        data: &BTreeMap<String, Vec<ArrayValue>>,
        titles: &BarChartTitles,
        world_readable: bool,
    ) -> PlotlyResult<ChartUrl> {
        let figure = stacked_bar_figure(categories, colors, data, titles)?;
        self.create_chart(filename, &figure, world_readable)
    }

    fn post_chart(
        &self,
        filename: &str,
        figure: &Figure,
        world_readable: bool,
    ) -> PlotlyResult<SavedChart> {
        let credentials = self.credentials()?;
        let fields = CreateRequest {
            credentials,
            platform: &self.config.platform,
            version: &self.config.version,
            filename,
            figure,
            world_readable,
        }
        .form_fields()?;
        let response = self.send(HttpRequest {
            method: HttpMethod::Post,
            url: self.config.endpoint(CREATE_PATH),
            headers: Vec::new(),
            body: RequestBody::Form(fields),
        })?;

        let created: CreateResponse = decode_response(&response.body, "create response")?;
        if created.url.is_empty() {
            return Err(self.remote_failure(created.status));
        }
        if let Some(message) = created.status.message.as_deref().filter(|m| !m.is_empty()) {
            debug!(service_message = message, "plotly create message");
        }
        Ok(SavedChart {
            url: ChartUrl::new(created.url),
            filename: created.filename,
        })
    }

    fn fetch_with_status(&self, id: &str) -> PlotlyResult<(Figure, ServiceStatus)> {
        let credentials = self.credentials()?;
        let url = self.config.endpoint(&format!(
            "{FETCH_PATH}{}/{id}",
            credentials.username
        ));
        let response = self.send(HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: self.auth_headers(credentials),
            body: RequestBody::Empty,
        })?;

        let fetched: FetchResponse = decode_response(&response.body, "fetch response")?;
        if fetched.status.has_error() {
            return Err(self.remote_failure(fetched.status));
        }
        match fetched.payload {
            Some(payload) => Ok((payload.figure, fetched.status)),
            None => Err(self.remote_failure(fetched.status)),
        }
    }

    fn credentials(&self) -> PlotlyResult<&Credentials> {
        self.config
            .credentials
            .as_ref()
            .ok_or(PlotlyError::NoCredentials)
    }

    fn auth_headers(&self, credentials: &Credentials) -> Vec<(&'static str, String)> {
        vec![
            ("plotly-username", credentials.username.clone()),
            ("plotly-apikey", credentials.api_key.clone()),
            ("plotly-version", self.config.version.clone()),
            ("plotly-platform", self.config.platform.clone()),
        ]
    }

    fn send(&self, request: HttpRequest) -> PlotlyResult<HttpResponse> {
        debug!(method = ?request.method, url = %request.url, "plotly api call");
        self.transport.execute(request)
    }

    fn remote_failure(&self, status: ServiceStatus) -> PlotlyError {
        let err = status.into_error();
        warn!(
            error = %err,
            base_url = %self.config.base_url,
            "plotly service reported a failure"
        );
        err
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::PlotlyClient;
    use crate::api::transport::{HttpRequest, HttpResponse, Transport};
    use crate::api::{ClientConfig, Credentials};
    use crate::error::{PlotlyError, PlotlyResult};

    #[derive(Default)]
    struct RecordingTransport {
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl Transport for RecordingTransport {
        fn execute(&self, request: HttpRequest) -> PlotlyResult<HttpResponse> {
            self.requests.borrow_mut().push(request);
            Ok(HttpResponse::ok(r#"{"error":"","warning":"Plot limit reached"}"#))
        }
    }

    #[test]
    fn fetch_uses_username_path_and_auth_headers() {
        let config = ClientConfig::new(Some(Credentials::new("alice", "k3y")));
        let client = PlotlyClient::with_transport(config, RecordingTransport::default());

        let err = client.fetch_chart("17").expect_err("no payload");
        assert_eq!(err.to_string(), "Plot limit reached");

        let requests = client.transport().requests.borrow();
        assert_eq!(requests[0].url, "https://plot.ly/apigetfile/alice/17");
        assert!(
            requests[0]
                .headers
                .contains(&("plotly-apikey", "k3y".to_owned()))
        );
    }

    #[test]
    fn create_without_url_surfaces_warning() {
        let config = ClientConfig::new(Some(Credentials::new("alice", "k3y")));
        let client = PlotlyClient::with_transport(config, RecordingTransport::default());

        let err = client
            .create_chart("x", &crate::core::Figure::default(), true)
            .expect_err("no url");
        assert!(matches!(err, PlotlyError::Remote { .. }));
        assert_eq!(err.to_string(), "Plot limit reached");
    }
}
