//! Developer-facing warnings for deprecated or suspicious component usage.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

static EMITTED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

/// Log `message` through `tracing::warn!` unless it was already logged by this process.
///
/// Returns `true` when the message was emitted.
pub fn warn_once(message: &str) -> bool {
    let emitted = EMITTED.get_or_init(|| Mutex::new(HashSet::new()));
    let first = match emitted.lock() {
        Ok(mut seen) => seen.insert(message.to_string()),
        // A poisoned set only loses de-duplication
        Err(poisoned) => poisoned.into_inner().insert(message.to_string()),
    };
    if first {
        tracing::warn!("{message}");
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_message_is_emitted_once() {
        let message = "Warning: [diagnostics-test] emitted once";
        assert!(warn_once(message));
        assert!(!warn_once(message));
        assert!(!warn_once(message));
    }

    #[test]
    fn distinct_messages_are_independent() {
        assert!(warn_once("Warning: [diagnostics-test] first"));
        assert!(warn_once("Warning: [diagnostics-test] second"));
    }
}
