//! JSON conversion helpers
//!
//! Output is indented with two spaces and keeps non-ASCII characters as
//! literal UTF-8 (serde_json never emits `\uXXXX` for them).
//!
//! The `json_to_*` and `record_to_json` helpers are lossy: a malformed
//! document gives an empty mapping or `None` and the error is only logged.
//! Callers that need the error use [`parse_mapping`] and [`parse_record`].

use crate::error::Result;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Serialize an ordered mapping of string or integer values.
pub fn mapping_to_json<V>(map: &IndexMap<String, V>) -> String
where
    V: Clone + Into<Value>,
{
    let object: Map<String, Value> = map
        .iter()
        .map(|(key, value)| (key.clone(), value.clone().into()))
        .collect();
    format!("{:#}", Value::Object(object))
}

/// Parse a JSON object whose values are all strings.
pub fn parse_mapping(json: &str) -> Result<IndexMap<String, String>> {
    Ok(serde_json::from_str(json)?)
}

/// Lossy form of [`parse_mapping`]: `None`, empty or malformed input gives an empty mapping.
pub fn json_to_mapping(json: Option<&str>) -> IndexMap<String, String> {
    let json = match json {
        Some(json) if !json.is_empty() => json,
        _ => return IndexMap::new(),
    };
    parse_mapping(json).unwrap_or_else(|e| {
        log::error!("{}", e);
        IndexMap::new()
    })
}

/// Serialize any record, logging and returning `None` on failure.
pub fn record_to_json<T>(record: &T) -> Option<String>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_string_pretty(record) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}

pub fn parse_record<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Lossy form of [`parse_record`]: `None`, empty or malformed input gives `None`.
pub fn json_to_record<T: DeserializeOwned>(json: Option<&str>) -> Option<T> {
    let json = json.filter(|json| !json.is_empty())?;
    match parse_record(json) {
        Ok(record) => Some(record),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}
