use serde::de::Error as _;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{PlotlyError, PlotlyResult};

use super::presence::finite_f64;

/// One stop of a custom color scale, encoded on the wire as `[position, "color"]`.
///
/// Positions are passed through as given; ordering and the `[0, 1]` range are
/// checked by the renderer, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: String,
}

impl ColorStop {
    #[must_use]
    pub fn new(position: f64, color: impl Into<String>) -> Self {
        Self {
            position,
            color: color.into(),
        }
    }
}

struct FinitePosition(f64);

impl Serialize for FinitePosition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        finite_f64(self.0, serializer)
    }
}

impl Serialize for ColorStop {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&FinitePosition(self.position))?;
        tuple.serialize_element(&self.color)?;
        tuple.end()
    }
}

/// Either a named preset (`"Viridis"`) or a list of custom stops.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScale {
    Preset(String),
    Custom(Vec<ColorStop>),
}

impl ColorScale {
    #[must_use]
    pub fn preset(name: impl Into<String>) -> Self {
        Self::Preset(name.into())
    }

    #[must_use]
    pub fn custom(stops: impl IntoIterator<Item = ColorStop>) -> Self {
        Self::Custom(stops.into_iter().collect())
    }

    /// Decodes a color scale from an already parsed value; `null` is absent.
    pub fn from_json_value(value: Value) -> PlotlyResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(_) => Err(PlotlyError::UnsupportedShape { shape: "boolean" }),
            Value::Object(_) => Err(PlotlyError::UnsupportedShape { shape: "object" }),
            Value::Array(entries) => entries
                .into_iter()
                .map(parse_stop)
                .collect::<PlotlyResult<Vec<_>>>()
                .map(|stops| Some(Self::Custom(stops))),
            preset => serde_json::from_value::<String>(preset)
                .map(|name| Some(Self::Preset(name)))
                .map_err(|e| PlotlyError::decode("color scale preset", e)),
        }
    }
}

fn parse_stop(entry: Value) -> PlotlyResult<ColorStop> {
    let pair = match entry {
        Value::Array(pair) => pair,
        other => {
            return Err(PlotlyError::InvalidInput(format!(
                "color scale stop must be a [position, color] pair: {other}"
            )));
        }
    };
    let [position, color] = pair.as_slice() else {
        return Err(PlotlyError::InvalidInput(format!(
            "color scale stop must have exactly two elements, got {}",
            pair.len()
        )));
    };
    let position = position.as_f64().ok_or_else(|| {
        PlotlyError::InvalidInput(format!(
            "color scale stop position is not numeric: {position}"
        ))
    })?;
    let color = color.as_str().ok_or_else(|| {
        PlotlyError::InvalidInput(format!("color scale stop color is not a string: {color}"))
    })?;
    Ok(ColorStop::new(position, color))
}

impl Serialize for ColorScale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Preset(name) => serializer.serialize_str(name),
            Self::Custom(stops) => stops.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ColorScale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json_value(raw)
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("color scale is null"))
    }
}
