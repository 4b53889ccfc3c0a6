pub mod client;
pub mod config;
pub mod credentials;
pub mod transport;
pub mod wire;

pub use client::{PlotlyClient, SavedChart};
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use credentials::{
    APIKEY_ENV, Credentials, USERNAME_ENV, credential_search_paths, resolve_credentials,
    resolve_credentials_from,
};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, RequestBody, Transport,
};
