use serde_json::Value;
use taskstep_core::Extensions;

/// Initializes logging for a test run; honours `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Converts a `json!` object literal into a configuration mapping.
pub fn config(value: &Value) -> Option<Extensions> {
    value.as_object().cloned()
}
