//! Utilities for snapshot testing with insta

use insta::{assert_snapshot, Settings};

/// Configure insta settings for consistent snapshots
pub fn with_settings<F>(f: F)
where
    F: FnOnce(),
{
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path("../snapshots");
    settings.set_prepend_module_to_snapshot(false);
    settings.bind(f);
}

/// Snapshot a structural dump as tests/snapshots/<name>.snap
pub fn assert_dump_snapshot(name: &str, dump: &str) {
    with_settings(|| {
        assert_snapshot!(name, dump);
    });
}
