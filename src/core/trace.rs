use serde::{Deserialize, Serialize};

use super::presence::{finite_option, null_as_default};
use super::{ColorScale, FloatOrList, StringOrList, TypedArray};

/// Trace type tag. Tags this crate does not model are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TraceType {
    #[default]
    Scatter,
    Bar,
    Histogram,
    Box,
    Heatmap,
    Contour,
    Pie,
    Scatter3d,
    Surface,
    Other(String),
}

impl TraceType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Histogram => "histogram",
            Self::Box => "box",
            Self::Heatmap => "heatmap",
            Self::Contour => "contour",
            Self::Pie => "pie",
            Self::Scatter3d => "scatter3d",
            Self::Surface => "surface",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for TraceType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "scatter" => Self::Scatter,
            "bar" => Self::Bar,
            "histogram" => Self::Histogram,
            "box" => Self::Box,
            "heatmap" => Self::Heatmap,
            "contour" => Self::Contour,
            "pie" => Self::Pie,
            "scatter3d" => Self::Scatter3d,
            "surface" => Self::Surface,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for TraceType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_owned())
    }
}

impl From<TraceType> for String {
    fn from(kind: TraceType) -> Self {
        match kind {
            TraceType::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBar {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symmetric: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array: Option<TypedArray>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrayminus: Option<TypedArray>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub valueminus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub thickness: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub width: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_ystyle: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl ErrorBar {
    /// Error bars of fixed per-point size taken from `values`.
    #[must_use]
    pub fn data(values: TypedArray) -> Self {
        Self {
            error_type: Some("data".to_owned()),
            array: Some(values),
            visible: Some(true),
            ..Self::default()
        }
    }

    /// Error bars sized as a percentage of each point's value.
    #[must_use]
    pub fn percent(value: f64) -> Self {
        Self {
            error_type: Some("percent".to_owned()),
            value: Some(value),
            visible: Some(true),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Marker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<FloatOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub opacity: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub sizeref: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<ColorScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cauto: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub cmin: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "finite_option"
    )]
    pub cmax: Option<f64>,
}

impl Marker {
    #[must_use]
    pub fn with_color(mut self, color: StringOrList) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: FloatOrList) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: StringOrList) -> Self {
        self.symbol = Some(symbol);
        self
    }

    #[must_use]
    pub fn with_colorscale(mut self, colorscale: ColorScale) -> Self {
        self.colorscale = Some(colorscale);
        self
    }
}

/// One data series of a figure.
///
/// Every field except `type` is optional and omitted from the wire form when
/// unset; `Some(TypedArray::default())` is sent as an explicit empty list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub trace_type: TraceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<TypedArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<TypedArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<TypedArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<TypedArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<TypedArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TypedArray>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_x: Option<ErrorBar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_y: Option<ErrorBar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
}

impl Trace {
    #[must_use]
    pub fn new(trace_type: impl Into<TraceType>) -> Self {
        Self {
            trace_type: trace_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scatter() -> Self {
        Self::new(TraceType::Scatter)
    }

    #[must_use]
    pub fn bar() -> Self {
        Self::new(TraceType::Bar)
    }

    #[must_use]
    pub fn with_x(mut self, x: TypedArray) -> Self {
        self.x = Some(x);
        self
    }

    #[must_use]
    pub fn with_y(mut self, y: TypedArray) -> Self {
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_z(mut self, z: TypedArray) -> Self {
        self.z = Some(z);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TypedArray) -> Self {
        self.text = Some(text);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_error_x(mut self, error: ErrorBar) -> Self {
        self.error_x = Some(error);
        self
    }

    #[must_use]
    pub fn with_error_y(mut self, error: ErrorBar) -> Self {
        self.error_y = Some(error);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_fillcolor(mut self, fillcolor: impl Into<String>) -> Self {
        self.fillcolor = Some(fillcolor.into());
        self
    }
}
