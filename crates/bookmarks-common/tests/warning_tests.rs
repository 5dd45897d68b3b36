//! Tests for the deduplicating warning system.

use bookmarks_common::warning::{clear_warnings, has_warned, warn_once};

// One test function so the global set is not shared across parallel tests.
#[test]
fn test_warn_once_records_and_clears() {
    assert!(!has_warned("Test", "first message"));

    warn_once("Test", "first message");
    warn_once("Test", "first message");
    assert!(has_warned("Test", "first message"));

    // Same message under a different component is a distinct warning
    assert!(!has_warned("Other", "first message"));

    clear_warnings();
    assert!(!has_warned("Test", "first message"));
}
