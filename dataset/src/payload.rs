//! FILENAME: dataset/src/payload.rs
//! Decoding of the backend API body.
//!
//! The API returns `{ "data": Record[] }` on success (optionally with a
//! `message` when the result set is legitimately empty) and
//! `{ "error": ..., "message": ... }` on failure. Decoding never panics:
//! every malformed shape maps to a typed error the caller can turn into an
//! empty "no data" state.

use crate::error::DatasetError;
use crate::record::Record;
use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// PAYLOAD SHAPE
// ============================================================================

/// The raw API body, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPayload {
    #[serde(default)]
    pub data: Option<Value>,

    #[serde(default)]
    pub error: Option<Value>,

    #[serde(default)]
    pub message: Option<String>,
}

impl ApiPayload {
    /// Validates the body and extracts the records.
    ///
    /// Precedence mirrors the frontend loader: a reported `error` wins over
    /// any `data`, then `data` must be an array of flat records.
    pub fn into_records(self) -> Result<Vec<Record>, DatasetError> {
        if let Some(err) = self.error.filter(is_truthy) {
            let message = self
                .message
                .unwrap_or_else(|| value_to_message(&err));
            return Err(DatasetError::Api(message));
        }

        match self.data {
            Some(Value::Array(items)) => {
                let records = items
                    .into_iter()
                    .map(serde_json::from_value::<Record>)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(records)
            }
            Some(_) | None => Err(DatasetError::MissingData),
        }
    }
}

/// Decodes an API body into records.
///
/// Any failure is logged and returned as a typed error; callers are expected
/// to degrade to zero records and surface their own "no data"/"error" state.
pub fn decode_payload(body: &str) -> Result<Vec<Record>, DatasetError> {
    let payload: ApiPayload = serde_json::from_str(body).map_err(|e| {
        log::warn!("payload is not valid JSON: {}", e);
        DatasetError::Malformed(e)
    })?;

    payload.into_records().map_err(|e| {
        log::warn!("payload rejected: {}", e);
        e
    })
}

/// JSON truthiness, matching the frontend's `if (resultado.error)` check.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_to_message(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
