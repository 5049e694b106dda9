//! Display implementations for tasks and steps.
//!
//! Output is markdown, meant for logs and debugging. String values are
//! printed without JSON quoting and unset fields print as `unset`.

use std::fmt;

use crate::models::{Extensions, Step, StepRef, Task, Value};

/// Formats a field value without JSON quotes around strings.
struct Field<'a>(Option<&'a Value>);

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None | Some(Value::Null) => write!(f, "unset"),
            Some(Value::String(s)) => write!(f, "{s}"),
            Some(other) => write!(f, "{other}"),
        }
    }
}

fn fmt_extensions(extensions: &Extensions, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (key, value) in extensions {
        writeln!(f, "- {key}: {}", Field(Some(value)))?;
    }
    Ok(())
}

impl Step {
    fn fmt_step(&self, f: &mut fmt::Formatter<'_>, current: bool) -> fmt::Result {
        let marker = if current { "➤ " } else { "" };
        write!(f, "### {marker}{}", Field(Some(&self.step_id)))?;
        if let Some(name) = &self.step_name {
            write!(f, ". {}", Field(Some(name)))?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "- Task: {}", Field(Some(&self.task_id)))?;
        writeln!(f, "- Owner: {}", Field(self.owner.as_ref()))?;
        writeln!(f, "- Status: {}", Field(self.status.as_ref()))?;
        fmt_extensions(&self.extensions, f)?;
        writeln!(f)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_step(f, false)
    }
}

impl fmt::Display for StepRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepRef::Index(index) => write!(f, "#{index}"),
            StepRef::Detached(step) => write!(f, "{} (detached)", Field(Some(&step.step_id))),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", Field(Some(&self.task_id)))?;
        writeln!(f)?;

        writeln!(f, "- Org: {}", Field(self.org.as_ref()))?;
        writeln!(f, "- Account: {}", Field(self.acct_id.as_ref()))?;
        if let Some(name) = &self.acct_name {
            writeln!(f, "- Account name: {}", Field(Some(name)))?;
        }
        writeln!(f, "- Type: {}", Field(self.task_type.as_ref()))?;
        fmt_extensions(&self.extensions, f)?;

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this task.")?;
            return Ok(());
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (index, step) in self.steps.iter().enumerate() {
            let current = matches!(self.cur_step, Some(StepRef::Index(i)) if i == index);
            step.fmt_step(f, current)?;
        }
        if let Some(cur @ StepRef::Detached(_)) = &self.cur_step {
            writeln!(f, "Current step: {cur}")?;
        }

        Ok(())
    }
}
