//! Serde adapters shared by the document records.
//!
//! A field that is set must reach the wire as a value, and a `null` from the
//! service means the same as a missing key.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Decodes `null` as the type's default, for fields that are not `Option`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Serializes a float, failing on NaN and infinities instead of letting
/// `serde_json` write them as `null`.
pub(crate) fn finite_f64<S>(value: f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        return Err(S::Error::custom(format!("non-finite float {value} cannot be encoded")));
    }
    serializer.serialize_f64(value)
}

/// `serialize_with` form of [`finite_f64`] for `Option<f64>` fields. Pair it
/// with `skip_serializing_if = "Option::is_none"`.
pub(crate) fn finite_option<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => finite_f64(*value, serializer),
        None => serializer.serialize_none(),
    }
}
