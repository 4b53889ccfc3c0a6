use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{PlotlyError, PlotlyResult};

use super::presence::finite_f64;

/// A field the remote schema accepts either as one value or as a list of values.
///
/// The schema carries no discriminator, so decoding looks at the shape of the
/// payload: an array is a list, `null` is an absent field, and any other
/// scalar is a single value. Booleans and objects are rejected.
///
/// Enclosing records hold this as `Option<ScalarOrList<T>>`; `None` is the
/// unset state and is omitted from the serialized object.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarOrList<T> {
    Scalar(T),
    List(Vec<T>),
}

pub type StringOrList = ScalarOrList<String>;
pub type FloatOrList = ScalarOrList<f64>;

impl<T> ScalarOrList<T> {
    #[must_use]
    pub fn scalar(value: impl Into<T>) -> Self {
        Self::Scalar(value.into())
    }

    #[must_use]
    pub fn list(values: impl IntoIterator<Item = T>) -> Self {
        Self::List(values.into_iter().collect())
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[T]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

impl<T: DeserializeOwned> ScalarOrList<T> {
    /// Decodes raw JSON by sniffing its leading token.
    ///
    /// Returns `Ok(None)` for empty input and for anything starting with `n`.
    pub fn from_json_str(raw: &str) -> PlotlyResult<Option<Self>> {
        let trimmed = raw.trim_start();
        let Some(first) = trimmed.bytes().next() else {
            return Ok(None);
        };

        match first {
            b'[' => serde_json::from_str::<Vec<T>>(trimmed)
                .map(|values| Some(Self::List(values)))
                .map_err(|e| PlotlyError::decode("scalar-or-list field as a list", e)),
            b'n' => Ok(None),
            b't' | b'f' => Err(PlotlyError::UnsupportedShape { shape: "boolean" }),
            b'{' => Err(PlotlyError::UnsupportedShape { shape: "object" }),
            _ => serde_json::from_str::<T>(trimmed)
                .map(|value| Some(Self::Scalar(value)))
                .map_err(|e| PlotlyError::decode("scalar-or-list field as a scalar", e)),
        }
    }

    /// Same dispatch as [`Self::from_json_str`] over an already parsed value.
    pub fn from_json_value(value: Value) -> PlotlyResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(_) => Err(PlotlyError::UnsupportedShape { shape: "boolean" }),
            Value::Object(_) => Err(PlotlyError::UnsupportedShape { shape: "object" }),
            Value::Array(_) => serde_json::from_value::<Vec<T>>(value)
                .map(|values| Some(Self::List(values)))
                .map_err(|e| PlotlyError::decode("scalar-or-list field as a list", e)),
            scalar => serde_json::from_value::<T>(scalar)
                .map(|value| Some(Self::Scalar(value)))
                .map_err(|e| PlotlyError::decode("scalar-or-list field as a scalar", e)),
        }
    }
}

/// Element types a [`ScalarOrList`] can carry on the wire.
///
/// Floats refuse to encode NaN and infinities, which `serde_json` would
/// otherwise write as `null` and turn a set field into an unset one.
pub trait WireScalar: Serialize {
    fn serialize_wire<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.serialize(serializer)
    }
}

impl WireScalar for String {}

impl WireScalar for f64 {
    fn serialize_wire<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        finite_f64(*self, serializer)
    }
}

struct Wire<'a, T>(&'a T);

impl<T: WireScalar> Serialize for Wire<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize_wire(serializer)
    }
}

impl<T: WireScalar> Serialize for ScalarOrList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Scalar(value) => value.serialize_wire(serializer),
            Self::List(values) => serializer.collect_seq(values.iter().map(Wire)),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ScalarOrList<T> {
    // `null` never reaches here when the field is an `Option`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json_value(raw)
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("scalar-or-list field is null"))
    }
}

#[cfg(test)]
mod tests {
    use super::{FloatOrList, StringOrList};
    use crate::error::PlotlyError;

    #[test]
    fn sniff_dispatches_on_leading_token() {
        assert_eq!(
            StringOrList::from_json_str(r#"["red","blue"]"#).expect("list"),
            Some(StringOrList::list(["red".to_owned(), "blue".to_owned()]))
        );
        assert_eq!(
            StringOrList::from_json_str(r#""red""#).expect("scalar"),
            Some(StringOrList::scalar("red"))
        );
        assert_eq!(
            FloatOrList::from_json_str("  12.5").expect("scalar"),
            Some(FloatOrList::Scalar(12.5))
        );
        assert_eq!(FloatOrList::from_json_str("null").expect("null"), None);
        assert_eq!(FloatOrList::from_json_str("").expect("empty"), None);
    }

    #[test]
    fn sniff_rejects_boolean_and_object_payloads() {
        let err = StringOrList::from_json_str("true").expect_err("boolean must fail");
        assert!(matches!(err, PlotlyError::UnsupportedShape { shape: "boolean" }));

        let err = FloatOrList::from_json_str(r#"{"a":1}"#).expect_err("object must fail");
        assert!(matches!(err, PlotlyError::UnsupportedShape { shape: "object" }));
    }

    #[test]
    fn scalar_of_wrong_primitive_kind_is_a_decode_error() {
        let err = FloatOrList::from_json_str(r#""big""#).expect_err("string is not a float");
        assert!(matches!(err, PlotlyError::Decode { .. }));
    }

    #[test]
    fn serde_deserialize_reports_unsupported_shape() {
        let err = serde_json::from_str::<StringOrList>("false").expect_err("boolean must fail");
        assert!(err.to_string().contains("unsupported polymorphic shape"));
    }

    #[test]
    fn non_finite_floats_do_not_encode_as_null() {
        let err = serde_json::to_string(&FloatOrList::Scalar(f64::INFINITY)).expect_err("scalar");
        assert!(err.to_string().contains("non-finite float"));

        let err = serde_json::to_string(&FloatOrList::list([1.0, f64::NAN])).expect_err("list");
        assert!(err.to_string().contains("non-finite float"));
    }

    #[test]
    fn serializes_populated_alternative() {
        let scalar = serde_json::to_string(&StringOrList::scalar("circle")).expect("scalar");
        assert_eq!(scalar, r#""circle""#);

        let list = serde_json::to_string(&FloatOrList::list([1.0, 2.5])).expect("list");
        assert_eq!(list, "[1.0,2.5]");
    }
}
