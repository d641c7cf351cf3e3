// HTTP handlers (controllers)

use axum::{
    http::{header::LOCATION, HeaderName, StatusCode},
    Json,
};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

pub mod auth;
pub mod players;
pub mod teams;

/// `201 Created` pointing the client back at the collection it added to
pub type Created<T> = (StatusCode, [(HeaderName, &'static str); 1], Json<T>);

pub(crate) fn created<T>(location: &'static str, body: T) -> Created<T> {
    (StatusCode::CREATED, [(LOCATION, location)], Json(body))
}

/// Reads a submitted field the way a form would send it
///
/// `null` becomes an empty string so the registry reports the field as
/// missing, and numbers are taken as their decimal text. Booleans, arrays
/// and objects are rejected.
pub(crate) fn form_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(json_kind(&other)),
            &"a string",
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "boolean",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        _ => "value",
    }
}
