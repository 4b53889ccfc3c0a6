use serde::{Deserialize, Serialize};

use crate::error::{PlotlyError, PlotlyResult};

use super::Trace;
use super::presence::null_as_default;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
}

impl Axis {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            axis_type: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, axis_type: impl Into<String>) -> Self {
        self.axis_type = Some(axis_type.into());
        self
    }
}

/// Presentation metadata of a figure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// A complete chart: layout plus the ordered list of traces.
///
/// An empty trace list is valid and leaves `data` out of the encoded document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: Layout,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub data: Vec<Trace>,
}

impl Figure {
    #[must_use]
    pub fn new(data: Vec<Trace>) -> Self {
        Self {
            layout: Layout::default(),
            data,
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn from_json_str(input: &str) -> PlotlyResult<Self> {
        serde_json::from_str(input).map_err(|e| PlotlyError::decode("chart document", e))
    }

    pub fn from_json_slice(input: &[u8]) -> PlotlyResult<Self> {
        serde_json::from_slice(input).map_err(|e| PlotlyError::decode("chart document", e))
    }

    pub fn to_json_string(&self) -> PlotlyResult<String> {
        serde_json::to_string(self).map_err(|e| PlotlyError::encode("chart document", e))
    }

    pub fn to_json_pretty(&self) -> PlotlyResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PlotlyError::encode("chart document", e))
    }
}
