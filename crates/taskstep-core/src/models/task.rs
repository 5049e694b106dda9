//! Task model definition and related functionality.

use log::{debug, trace};
use serde::Serialize;

use super::value::{self, Extensions, Value};
use super::Step;
use crate::error::Result;

/// Built-in field names merged from a configuration.
pub(crate) const TASK_FIELDS: [&str; 5] = ["task_id", "org", "acct_id", "acct_name", "task_type"];

/// Fields reset after the configuration merge, whatever it supplied.
pub(crate) const TASK_RESET_FIELDS: [&str; 2] = ["steps", "cur_step"];

/// Non-owning pointer to the step a task is currently on.
///
/// Membership is never checked: an index may be out of range and a detached
/// step need not belong to the task at all.
#[derive(Debug, Clone, PartialEq)]
pub enum StepRef {
    /// Position in [`Task::steps`]
    Index(usize),

    /// A step supplied from outside the task's collection
    Detached(Box<Step>),
}

/// Represents a top-level unit of work owning an ordered list of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Identifier of the task, taken as-is from the caller
    pub task_id: Value,

    /// Organisation the task belongs to
    pub org: Option<Value>,

    /// Account identifier
    pub acct_id: Option<Value>,

    /// Account display name
    pub acct_name: Option<Value>,

    /// Free-form task classification
    pub task_type: Option<Value>,

    /// Fields supplied by the configuration that are not built-ins
    pub extensions: Extensions,

    /// Steps in insertion order, not deduplicated by `step_id`
    pub steps: Vec<Step>,

    /// The current step, if any
    pub cur_step: Option<StepRef>,
}

impl Task {
    /// Creates a task and merges `configuration` onto it.
    ///
    /// The merge follows the same overwrite rule as [`Step::new`]. Once it
    /// is done, `steps` is emptied and `cur_step` cleared, so configuration
    /// keys of those names have no effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use taskstep_core::Task;
    ///
    /// let config = json!({"org": "acme", "steps": [1, 2, 3], "cur_step": "X"});
    /// let task = Task::new("T1", config.as_object().cloned());
    ///
    /// assert_eq!(task.org, Some(json!("acme")));
    /// assert!(task.steps.is_empty());
    /// assert!(task.cur_step.is_none());
    /// ```
    pub fn new(task_id: impl Into<Value>, configuration: Option<Extensions>) -> Self {
        let mut task = Self {
            task_id: task_id.into(),
            org: None,
            acct_id: None,
            acct_name: None,
            task_type: None,
            extensions: Extensions::new(),
            steps: Vec::new(),
            cur_step: None,
        };

        for (key, value) in configuration.into_iter().flatten() {
            task.merge_field(key, value);
        }

        // Reset after the merge.
        task.steps = Vec::new();
        task.cur_step = None;

        trace!(
            "constructed task {} with {} extension field(s)",
            task.task_id,
            task.extensions.len()
        );
        task
    }

    /// Creates a task from a dynamic configuration value.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InvalidInput` if `configuration` is neither an
    /// object nor `null`.
    pub fn from_config(task_id: impl Into<Value>, configuration: &Value) -> Result<Self> {
        let configuration = value::configuration_from_value(configuration)?;
        Ok(Self::new(task_id, configuration))
    }

    /// Creates a task from any serializable configuration.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Serialization` if `configuration` cannot be
    /// serialized, or `TaskError::InvalidInput` if it does not serialize to
    /// a mapping.
    pub fn with_config<C>(task_id: impl Into<Value>, configuration: &C) -> Result<Self>
    where
        C: Serialize + ?Sized,
    {
        let configuration = value::configuration_from_serialize(configuration)?;
        Ok(Self::new(task_id, configuration))
    }

    /// Looks up an extension field.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    /// Resolves [`Task::cur_step`] to a step.
    ///
    /// Returns `None` when no current step is set or when an index points
    /// past the end of [`Task::steps`].
    pub fn current_step(&self) -> Option<&Step> {
        match self.cur_step.as_ref()? {
            StepRef::Index(index) => self.steps.get(*index),
            StepRef::Detached(step) => Some(&**step),
        }
    }

    fn merge_field(&mut self, key: String, value: Value) {
        if TASK_FIELDS.contains(&key.as_str()) {
            debug!("configuration key '{key}' overwrites built-in task field");
        }

        match key.as_str() {
            "task_id" => self.task_id = value,
            "org" => self.org = value::optional(value),
            "acct_id" => self.acct_id = value::optional(value),
            "acct_name" => self.acct_name = value::optional(value),
            "task_type" => self.task_type = value::optional(value),
            k if TASK_RESET_FIELDS.contains(&k) => {
                debug!("configuration key '{key}' is discarded by the task reset");
            }
            _ => {
                self.extensions.insert(key, value);
            }
        }
    }
}
