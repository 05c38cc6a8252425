//! Endpoint functions, one module per resource.

pub mod auth;
pub mod projects;
pub mod users;

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::AppError;

pub(crate) fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, AppError> {
    serde_json::from_value(payload).map_err(|e| AppError::decode(e.to_string()))
}

/// Single-record endpoints sometimes wrap the record in `{data: {...}}`.
pub(crate) fn unwrap_data(payload: Value) -> Value {
    match payload {
        Value::Object(mut obj) if obj.get("data").is_some_and(Value::is_object) => {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
