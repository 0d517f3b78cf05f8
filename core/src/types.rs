//! Value types shared by the server and the client core.
//!
//! # Design
//! Each model derives `Deserialize` and is built through `from_map` /
//! `from_value`. Integer and boolean fields go through `crate::lax`, so
//! `"1500"`, `1500.0` and `0` convert, while a missing field or a value that
//! cannot convert without loss surfaces as a `ValidationError`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::lax;

/// Length of a pomodoro work phase in seconds (25 minutes).
pub const WORK_DURATION_SECS: i64 = 25 * 60;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(deserialize_with = "lax::int")]
    pub id: i64,
    pub text: String,
    #[serde(deserialize_with = "lax::boolean")]
    pub done: bool,
}

impl Todo {
    pub fn from_map(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        from_fields(fields)
    }

    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        from_object(value)
    }
}

/// A pomodoro timer record. `time` is the number of seconds remaining.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pomodoro {
    #[serde(deserialize_with = "lax::int")]
    pub id: i64,
    #[serde(deserialize_with = "lax::int")]
    pub time: i64,
    #[serde(deserialize_with = "lax::boolean")]
    pub running: bool,
}

impl Pomodoro {
    pub fn from_map(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        from_fields(fields)
    }

    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        from_object(value)
    }
}

/// Timer snapshot served by `GET /pomodoro`.
///
/// The default is a paused timer at the start of a work phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PomodoroStatus {
    #[serde(deserialize_with = "lax::int")]
    pub time: i64,
    #[serde(deserialize_with = "lax::boolean")]
    pub running: bool,
}

impl Default for PomodoroStatus {
    fn default() -> Self {
        Self {
            time: WORK_DURATION_SECS,
            running: false,
        }
    }
}

impl PomodoroStatus {
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        from_object(value)
    }
}

/// Body of the root health check, `{"Hello": "World"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            hello: "World".to_string(),
        }
    }
}

impl Greeting {
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        from_object(value)
    }
}

fn from_fields<T: DeserializeOwned>(fields: &Map<String, Value>) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(fields.clone())).map_err(ValidationError::from)
}

fn from_object<T: DeserializeOwned>(value: Value) -> Result<T, ValidationError> {
    match value {
        Value::Object(_) => serde_json::from_value(value).map_err(ValidationError::from),
        other => Err(ValidationError::new(format!(
            "expected an object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
