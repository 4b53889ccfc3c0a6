use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{PlotlyError, PlotlyResult};

use super::presence::finite_f64;

/// Date format the remote service parses for time-valued data.
pub const PLOTLY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Kind reported by [`TypedArray::kind_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrayKind {
    Empty,
    Integer,
    Float,
    String,
    Time,
    Unknown,
}

/// One element of a data channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayValue {
    Integer(i64),
    Float(f64),
    String(String),
    Time(DateTime<Utc>),
    /// Anything else the service sent (`null` gaps, booleans, nested values).
    Other(Value),
}

impl ArrayValue {
    #[must_use]
    pub fn kind(&self) -> ArrayKind {
        match self {
            Self::Integer(_) => ArrayKind::Integer,
            Self::Float(_) => ArrayKind::Float,
            Self::String(_) => ArrayKind::String,
            Self::Time(_) => ArrayKind::Time,
            Self::Other(_) => ArrayKind::Unknown,
        }
    }

    fn from_json(value: Value) -> Self {
        match value {
            Value::Number(number) => match (number.as_i64(), number.as_f64()) {
                (Some(int), _) => Self::Integer(int),
                (None, Some(float)) => Self::Float(float),
                (None, None) => Self::Other(Value::Number(number)),
            },
            Value::String(text) => Self::String(text),
            other => Self::Other(other),
        }
    }
}

impl From<i64> for ArrayValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ArrayValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for ArrayValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ArrayValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<DateTime<Utc>> for ArrayValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl Serialize for ArrayValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) => finite_f64(*value, serializer),
            Self::String(value) => serializer.serialize_str(value),
            Self::Time(value) => {
                serializer.collect_str(&value.naive_utc().format(PLOTLY_DATE_FORMAT))
            }
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ArrayValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

/// One data channel (`x`, `y`, `text`, error values, ...) of a trace.
///
/// Elements are expected to share one kind but this is not enforced when the
/// array is built or decoded. [`TypedArray::kind_of`] is a constant-time peek
/// at the first element, not a validation pass; the `as_*` conversions are
/// where a mixed array gets rejected.
///
/// Contents only change through whole-sequence replacement (`set_*`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypedArray {
    values: Vec<ArrayValue>,
}

impl TypedArray {
    #[must_use]
    pub fn new(values: Vec<ArrayValue>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn integers(values: impl IntoIterator<Item = i64>) -> Self {
        values.into_iter().map(ArrayValue::Integer).collect()
    }

    #[must_use]
    pub fn floats(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().map(ArrayValue::Float).collect()
    }

    #[must_use]
    pub fn strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        values
            .into_iter()
            .map(|value| ArrayValue::String(value.into()))
            .collect()
    }

    #[must_use]
    pub fn times(values: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        values.into_iter().map(ArrayValue::Time).collect()
    }

    #[must_use]
    pub fn values(&self) -> &[ArrayValue] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArrayValue> {
        self.values.iter()
    }

    /// Reports the kind of the first element only.
    #[must_use]
    pub fn kind_of(&self) -> ArrayKind {
        self.values
            .first()
            .map_or(ArrayKind::Empty, ArrayValue::kind)
    }

    pub fn as_integers(&self) -> PlotlyResult<Vec<i64>> {
        self.convert(ArrayKind::Integer, |value| match value {
            ArrayValue::Integer(int) => Some(*int),
            _ => None,
        })
    }

    /// Integers widen to floats when the float holds them exactly. An integer
    /// that would round (beyond 2^53) is a mismatch, as is every other kind.
    pub fn as_floats(&self) -> PlotlyResult<Vec<f64>> {
        self.convert(ArrayKind::Float, |value| match value {
            ArrayValue::Float(float) => Some(*float),
            ArrayValue::Integer(int) => exact_float(*int),
            _ => None,
        })
    }

    pub fn as_strings(&self) -> PlotlyResult<Vec<String>> {
        self.convert(ArrayKind::String, |value| match value {
            ArrayValue::String(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn as_times(&self) -> PlotlyResult<Vec<DateTime<Utc>>> {
        self.convert(ArrayKind::Time, |value| match value {
            ArrayValue::Time(time) => Some(*time),
            _ => None,
        })
    }

    pub fn set_integers(&mut self, values: impl IntoIterator<Item = i64>) {
        *self = Self::integers(values);
    }

    pub fn set_floats(&mut self, values: impl IntoIterator<Item = f64>) {
        *self = Self::floats(values);
    }

    pub fn set_strings<S: Into<String>>(&mut self, values: impl IntoIterator<Item = S>) {
        *self = Self::strings(values);
    }

    pub fn set_times(&mut self, values: impl IntoIterator<Item = DateTime<Utc>>) {
        *self = Self::times(values);
    }

    fn convert<T>(
        &self,
        expected: ArrayKind,
        pick: impl Fn(&ArrayValue) -> Option<T>,
    ) -> PlotlyResult<Vec<T>> {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                pick(value).ok_or(PlotlyError::KindMismatch {
                    index,
                    expected,
                    found: value.kind(),
                })
            })
            .collect()
    }
}

fn exact_float(int: i64) -> Option<f64> {
    let float = int as f64;
    (float as i128 == i128::from(int)).then_some(float)
}

impl FromIterator<ArrayValue> for TypedArray {
    fn from_iter<I: IntoIterator<Item = ArrayValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TypedArray {
    type Item = &'a ArrayValue;
    type IntoIter = std::slice::Iter<'a, ArrayValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Serialize for TypedArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.values.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TypedArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<ArrayValue>::deserialize(deserializer).map(Self::new)
    }
}
