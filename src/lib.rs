//! plotly-client: a blocking client for the Plotly charting web service.
//!
//! `core` holds the chart document model and its wire encoding, `api` the
//! credentials, configuration and HTTP client that create, fetch and render
//! charts.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ClientConfig, Credentials, PlotlyClient};
pub use core::{ChartUrl, Figure, Layout, Trace, TypedArray};
pub use error::{PlotlyError, PlotlyResult};
