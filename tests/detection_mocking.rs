//! Detection cache behavior with mocked environments.
//!
//! Runs as its own integration binary so the process-wide detection cache
//! is not shared with the unit-test suite.

use envtraits::catalog::ci::GITHUB_ACTIONS;
use envtraits::catalog::platforms::{BSD, MACOS, UBUNTU};
use envtraits::{clear_detection_cache, set_detection_override};

#[test]
fn overrides_drive_trait_and_group_currency() {
    clear_detection_cache();

    // Force a mock environment: macOS, on GitHub Actions.
    set_detection_override("macos", true);
    set_detection_override("ubuntu", false);
    set_detection_override("github_actions", true);

    assert!(MACOS.current());
    assert!(!UBUNTU.current());
    assert!(GITHUB_ACTIONS.current());

    // Group currency follows member currency.
    assert!(BSD.current());
    let current: Vec<&str> = BSD
        .current_members()
        .iter()
        .map(|t| t.id())
        .collect();
    assert!(current.contains(&"macos"));

    // Info schema is stable whether or not the trait matches.
    let matched = MACOS.info();
    let unmatched = UBUNTU.info();
    assert_eq!(
        matched.keys().collect::<Vec<_>>(),
        unmatched.keys().collect::<Vec<_>>()
    );
    assert_eq!(matched["current"], serde_json::json!(true));
    assert_eq!(unmatched["current"], serde_json::json!(false));
    assert_eq!(unmatched["os"], serde_json::Value::Null);

    // Clearing the cache drops the mock; detection re-probes the real
    // environment, which cannot be both macOS and Ubuntu.
    clear_detection_cache();
    assert!(!(MACOS.current() && UBUNTU.current()));
}
