//! Process-wide identifier allocation.
//!
//! Instance ids route deferred messages back to the model that scheduled them.
//! Control ids associate a disclosure label with its hidden input; they are
//! unique for every instance created in the process.

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_INSTANCE_ID: AtomicI64 = AtomicI64::new(0);
static LAST_CONTROL_ID: AtomicI64 = AtomicI64::new(0);

/// Prefix of generated control identifiers.
pub const CONTROL_ID_PREFIX: &str = "expandable-content-";

/// Returns the next unique, positive instance id.
pub fn next_instance_id() -> i64 {
    LAST_INSTANCE_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Returns a fresh control identifier such as `expandable-content-7`.
pub fn next_control_id() -> String {
    let n = LAST_CONTROL_ID.fetch_add(1, Ordering::SeqCst) + 1;
    format!("{CONTROL_ID_PREFIX}{n}")
}
