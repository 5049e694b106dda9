//! Dynamic values and configuration coercion shared by both records.

use log::debug;
use serde::Serialize;

use crate::error::{Result, TaskError};

/// Dynamically typed field value.
pub use serde_json::Value;

/// Extension fields attached to a record, keyed by field name.
pub type Extensions = serde_json::Map<String, Value>;

/// Turns a dynamic configuration into a mapping.
///
/// `null` counts as an empty mapping. Any other non-object kind is rejected.
pub(crate) fn configuration_from_value(configuration: &Value) -> Result<Option<Extensions>> {
    match configuration {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map.clone())),
        other => {
            let kind = kind_name(other);
            debug!("rejecting non-mapping configuration of kind {kind}");
            Err(TaskError::invalid_input("configuration")
                .with_reason(format!("expected a mapping or null, got {kind}")))
        }
    }
}

/// Serializes a typed configuration and coerces it into a mapping.
pub(crate) fn configuration_from_serialize<C>(configuration: &C) -> Result<Option<Extensions>>
where
    C: Serialize + ?Sized,
{
    let value = serde_json::to_value(configuration)?;
    configuration_from_value(&value)
}

/// `None` for JSON null, so that an explicit null leaves a field unset.
pub(crate) fn optional(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        v => Some(v),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
