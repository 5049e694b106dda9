//! Data models for tasks and steps.
//!
//! Both records have a small set of built-in fields plus an open-ended
//! [`Extensions`] map filled from a caller-supplied configuration. Display
//! implementations live in [`crate::display`].
//!
//! # Configuration merge
//!
//! Construction merges each configuration entry onto the new record:
//!
//! - a key naming a built-in field overwrites it (`null` leaves an optional
//!   field unset);
//! - any other key is stored as an extension field.
//!
//! A [`Task`] additionally empties [`Task::steps`] and clears
//! [`Task::cur_step`] after the merge.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use taskstep_core::models::{Step, StepRef, Task};
//!
//! let mut task = Task::new("T1", json!({"task_type": "import"}).as_object().cloned());
//! task.steps.push(Step::new("S1", "T1", None));
//! task.steps.push(Step::new("S2", "T1", None));
//! task.cur_step = Some(StepRef::Index(1));
//!
//! assert_eq!(task.current_step().map(|s| &s.step_id), Some(&json!("S2")));
//! ```

pub mod step;
pub mod task;
pub mod value;


pub use step::Step;
pub use task::{StepRef, Task};
pub use value::{Extensions, Value};
