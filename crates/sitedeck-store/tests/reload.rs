//! Reload behavior against real files: what survives a process restart.
//!
//! Each test simulates a restart by building a fresh store over the same
//! slot directory.

use sitedeck_store::{
    ColorMode, ContentPatch, ContentStore, FileSlots, NullSink, SiteContent, ThemePatch,
};

fn store_in(dir: &std::path::Path) -> ContentStore {
    ContentStore::initialize(FileSlots::new(dir), NullSink)
}

#[test]
fn committed_update_survives_reload() {
    let dir = tempfile::TempDir::new().unwrap();

    let store = store_in(dir.path());
    store.update(ContentPatch {
        tagline: Some("Rewritten at runtime".into()),
        email: Some("edited@example.test".into()),
        ..Default::default()
    });
    drop(store);

    let reloaded = store_in(dir.path());
    let content = reloaded.read();
    assert_eq!(content.tagline, "Rewritten at runtime");
    assert_eq!(content.email, "edited@example.test");
    // Untouched fields come back as compiled defaults.
    assert_eq!(content.company_name, SiteContent::default().company_name);
}

#[test]
fn preview_theme_does_not_survive_reload() {
    let dir = tempfile::TempDir::new().unwrap();

    let store = store_in(dir.path());
    store.set_theme_colors(ThemePatch::new().primary("#1a1a2e"), false);
    assert_eq!(store.read().theme.primary.as_deref(), Some("240 28% 14%"));
    drop(store);

    let reloaded = store_in(dir.path());
    assert_eq!(
        reloaded.read().theme.primary,
        SiteContent::default().theme.primary
    );
}

#[test]
fn persisted_theme_survives_reload() {
    let dir = tempfile::TempDir::new().unwrap();

    let store = store_in(dir.path());
    store.set_theme_colors(ThemePatch::new().primary("#1a1a2e"), true);
    drop(store);

    let reloaded = store_in(dir.path());
    let theme = reloaded.read().theme;
    assert_eq!(theme.primary.as_deref(), Some("240 28% 14%"));
    assert_eq!(theme.primary_foreground.as_deref(), Some("210 40% 98%"));
    assert_eq!(theme.ring.as_deref(), Some("240 28% 14%"));
}

#[test]
fn toggled_mode_survives_reload_via_mode_slot() {
    let dir = tempfile::TempDir::new().unwrap();

    let store = store_in(dir.path());
    store.toggle_mode();
    assert_eq!(store.read().mode, ColorMode::Dark);
    drop(store);

    // The content blob was never rewritten; only the mode slot carries the
    // flip, and it takes precedence at initialize.
    let reloaded = store_in(dir.path());
    assert_eq!(reloaded.read().mode, ColorMode::Dark);
}

#[test]
fn corrupted_blob_falls_back_to_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("content.json"), "][ definitely not json").unwrap();

    let store = store_in(dir.path());
    assert_eq!(store.read(), SiteContent::default());
}

#[test]
fn mode_slot_with_garbage_token_is_ignored() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("mode"), "sepia").unwrap();

    let store = store_in(dir.path());
    assert_eq!(store.read().mode, ColorMode::Light);
}
