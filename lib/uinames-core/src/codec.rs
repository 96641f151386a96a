//! Wire-format helpers: query-string encoding and JSON decoding.

use crate::Result;

/// Serialize a value to a query string.
///
/// Uses `serde_urlencoded`, so values come out form-encoded (spaces become
/// `+`). Serializing an ordered map yields a key-sorted, canonical string.
///
/// # Errors
///
/// Returns an error if query serialization fails.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use uinames_core::to_query_string;
///
/// let params = BTreeMap::from([("region", "New Zealand"), ("amount", "5")]);
/// let query = to_query_string(&params).expect("serialize");
/// assert_eq!(query, "amount=5&region=New+Zealand");
/// ```
pub fn to_query_string<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_urlencoded::to_string(value).map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so failures name the exact field that could
/// not be deserialized (e.g., "[2].credit_card.pin").
///
/// # Errors
///
/// Returns an error if JSON deserialization fails, with the underlying
/// parser message and the path to the problematic field.
///
/// # Example
///
/// ```
/// use serde::Deserialize;
/// use uinames_core::from_json;
///
/// #[derive(Debug, Deserialize)]
/// struct Payload {
///     error: String,
/// }
///
/// let bytes = br#"{"error":"Region or language not found"}"#;
/// let payload: Payload = from_json(bytes).expect("deserialize");
/// assert_eq!(payload.error, "Region or language not found");
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
