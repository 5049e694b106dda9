//! Core library for task and step records.
//!
//! A [`Task`] owns an ordered list of [`Step`]s and an optional pointer to
//! the current one. Both records carry a few built-in fields and accept an
//! open-ended configuration mapping at construction time; keys that are not
//! built-ins become extension fields.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use taskstep_core::{Step, StepRef, Task};
//!
//! # fn example() -> taskstep_core::Result<()> {
//! let mut task = Task::from_config("T1", &json!({"org": "acme", "priority": 3}))?;
//! assert_eq!(task.extension("priority"), Some(&json!(3)));
//!
//! task.steps.push(Step::from_config("S1", "T1", &json!({"status": "pending"}))?);
//! task.cur_step = Some(StepRef::Index(0));
//! println!("{task}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::{Result, TaskError};
pub use models::{Extensions, Step, StepRef, Task, Value};
