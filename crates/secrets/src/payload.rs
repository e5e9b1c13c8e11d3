//! Validated decode of Vault read responses
//!
//! The KV version 2 engine answers a read with
//! `{"data": {"data": {<key>: <value>, ...}, "metadata": {...}}}`.
//! This is the only place that looks at the raw JSON; everything downstream
//! works with [`SecretData`].

use kvault_core::{Error, Result, SecretData};
use serde_json::Value;

/// Decode a response body read from `path`
pub fn decode_payload(path: &str, body: &Value) -> Result<SecretData> {
    let envelope = body
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::secret_data_shape(path, "response has no data"))?;

    let inner = match envelope.get("data") {
        None | Some(Value::Null) => return Err(Error::secret_data_shape(path, "data not found")),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(Error::secret_data_shape(path, "data is not a map")),
    };

    let mut data = SecretData::new();
    for (key, value) in inner {
        let Value::String(value) = value else {
            return Err(Error::secret_data_shape(
                path,
                format!("value of key \"{key}\" is not a string"),
            ));
        };
        data.insert(key.as_str(), value.as_str());
    }

    Ok(data)
}

/// Error strings from a Vault error body (`{"errors": [...]}`), if any
pub(crate) fn error_messages(body: &Value) -> Option<String> {
    let errors: Vec<&str> = body
        .get("errors")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .collect();

    if errors.is_empty() {
        None
    } else {
        Some(errors.join("; "))
    }
}
