//! Step model definition and related functionality.

use log::{debug, trace};
use serde::Serialize;

use super::value::{self, Extensions, Value};
use crate::error::Result;

/// Built-in field names; configuration keys matching one of these overwrite
/// the field instead of becoming an extension.
pub(crate) const STEP_FIELDS: [&str; 5] = ["step_id", "task_id", "step_name", "owner", "status"];

/// Represents a single unit of work belonging to a task.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Identifier of the step, taken as-is from the caller
    pub step_id: Value,

    /// Identifier of the owning task (not checked against any task)
    pub task_id: Value,

    /// Human readable name
    pub step_name: Option<Value>,

    /// Who is responsible for the step
    pub owner: Option<Value>,

    /// Free-form status value
    pub status: Option<Value>,

    /// Fields supplied by the configuration that are not built-ins
    pub extensions: Extensions,
}

impl Step {
    /// Creates a step and merges `configuration` onto it.
    ///
    /// Keys naming a built-in field overwrite that field (a JSON `null`
    /// leaves an optional field unset); every other key is kept in
    /// [`Step::extensions`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use taskstep_core::Step;
    ///
    /// let config = json!({"status": "pending", "owner": "alice"});
    /// let step = Step::new("S1", "T1", config.as_object().cloned());
    ///
    /// assert_eq!(step.step_id, json!("S1"));
    /// assert_eq!(step.status, Some(json!("pending")));
    /// assert_eq!(step.owner, Some(json!("alice")));
    /// assert_eq!(step.step_name, None);
    /// ```
    pub fn new(
        step_id: impl Into<Value>,
        task_id: impl Into<Value>,
        configuration: Option<Extensions>,
    ) -> Self {
        let mut step = Self {
            step_id: step_id.into(),
            task_id: task_id.into(),
            step_name: None,
            owner: None,
            status: None,
            extensions: Extensions::new(),
        };

        for (key, value) in configuration.into_iter().flatten() {
            step.merge_field(key, value);
        }

        trace!(
            "constructed step {} for task {} with {} extension field(s)",
            step.step_id,
            step.task_id,
            step.extensions.len()
        );
        step
    }

    /// Creates a step from a dynamic configuration value.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidInput` if `configuration` is neither an
    /// object nor `null`.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use taskstep_core::Step;
    ///
    /// assert!(Step::from_config("S1", "T1", &json!(null)).is_ok());
    /// assert!(Step::from_config("S1", "T1", &json!(7)).is_err());
    /// ```
    pub fn from_config(
        step_id: impl Into<Value>,
        task_id: impl Into<Value>,
        configuration: &Value,
    ) -> Result<Self> {
        let configuration = value::configuration_from_value(configuration)?;
        Ok(Self::new(step_id, task_id, configuration))
    }

    /// Creates a step from any serializable configuration.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Serialization` if `configuration` cannot be
    /// serialized, or `TaskError::InvalidInput` if it does not serialize to
    /// a mapping.
    pub fn with_config<C>(
        step_id: impl Into<Value>,
        task_id: impl Into<Value>,
        configuration: &C,
    ) -> Result<Self>
    where
        C: Serialize + ?Sized,
    {
        let configuration = value::configuration_from_serialize(configuration)?;
        Ok(Self::new(step_id, task_id, configuration))
    }

    /// Looks up an extension field.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    fn merge_field(&mut self, key: String, value: Value) {
        if STEP_FIELDS.contains(&key.as_str()) {
            debug!("configuration key '{key}' overwrites built-in step field");
        }

        match key.as_str() {
            "step_id" => self.step_id = value,
            "task_id" => self.task_id = value,
            "step_name" => self.step_name = value::optional(value),
            "owner" => self.owner = value::optional(value),
            "status" => self.status = value::optional(value),
            _ => {
                self.extensions.insert(key, value);
            }
        }
    }
}
