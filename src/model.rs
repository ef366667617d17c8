//! Data records exchanged with the sample service
//!
//! Plain data holders whose fields map one-to-one onto JSON keys. Fields
//! missing from an input document take their zero value.

use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit `null` as the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A `{"key": ..., "value": ...}` pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValuePair {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// User information document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_name: String,
    pub is_excellent: bool,
    pub some_int_value: i32,
    /// `null` stays `None`; it is never read as `0.0`.
    pub some_double_value: Option<f64>,
    /// `None` when the key is absent or `null`.
    pub kvs: Option<Vec<KeyValuePair>>,
}
