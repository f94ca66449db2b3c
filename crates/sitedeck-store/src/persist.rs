//! Durable slots for the content blob and the mode flag.
//!
//! Persistence is two independent keys: `content` holds the serialized
//! [`SiteContent`](crate::SiteContent) aggregate as JSON, `mode` holds the
//! bare token `light` or `dark`. They are written at different times (the
//! mode slot on every toggle, the content slot on committed updates), which
//! is why they stay separate.
//!
//! The store treats persistence as best-effort: a [`SlotStore`] that cannot
//! read returns `None`, and write failures surface as [`SlotError`] which
//! the store logs and swallows — the in-memory snapshot stays authoritative.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The two durable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Full serialized content aggregate.
    Content,
    /// The `light`/`dark` token, persisted independently of the blob.
    Mode,
}

impl Slot {
    /// Stable key name, used for file names and log messages.
    pub fn key(self) -> &'static str {
        match self {
            Slot::Content => "content",
            Slot::Mode => "mode",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Slot::Content => "content.json",
            Slot::Mode => "mode",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error writing a slot (e.g. disk full, permission denied).
#[derive(Debug, Error)]
#[error("failed to write slot '{slot}': {source}")]
pub struct SlotError {
    pub slot: &'static str,
    #[source]
    pub source: io::Error,
}

/// Backing storage for the two slots.
///
/// `load` is deliberately infallible-looking: absence and unreadability are
/// the same "fall back to defaults" case for the store.
pub trait SlotStore {
    fn load(&self, slot: Slot) -> Option<String>;
    fn save(&mut self, slot: Slot, value: &str) -> Result<(), SlotError>;
}

/// Directory-backed slots: `content.json` and `mode` files under one
/// directory, created on first save.
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, slot: Slot) -> PathBuf {
        self.dir.join(slot.file_name())
    }
}

impl SlotStore for FileSlots {
    fn load(&self, slot: Slot) -> Option<String> {
        fs::read_to_string(self.path(slot)).ok()
    }

    fn save(&mut self, slot: Slot, value: &str) -> Result<(), SlotError> {
        fs::create_dir_all(&self.dir).map_err(|source| SlotError {
            slot: slot.key(),
            source,
        })?;
        fs::write(self.path(slot), value).map_err(|source| SlotError {
            slot: slot.key(),
            source,
        })
    }
}

/// In-memory slots for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    values: HashMap<Slot, String>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot value, returning `self` for chaining.
    pub fn preload(mut self, slot: Slot, value: impl Into<String>) -> Self {
        self.values.insert(slot, value.into());
        self
    }
}

impl SlotStore for MemorySlots {
    fn load(&self, slot: Slot) -> Option<String> {
        self.values.get(&slot).cloned()
    }

    fn save(&mut self, slot: Slot, value: &str) -> Result<(), SlotError> {
        self.values.insert(slot, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slots_roundtrip() {
        let mut slots = MemorySlots::new();
        assert_eq!(slots.load(Slot::Content), None);

        slots.save(Slot::Content, "{}").unwrap();
        slots.save(Slot::Mode, "dark").unwrap();

        assert_eq!(slots.load(Slot::Content).as_deref(), Some("{}"));
        assert_eq!(slots.load(Slot::Mode).as_deref(), Some("dark"));
    }

    #[test]
    fn memory_slots_preload() {
        let slots = MemorySlots::new().preload(Slot::Mode, "dark");
        assert_eq!(slots.load(Slot::Mode).as_deref(), Some("dark"));
    }

    #[test]
    fn file_slots_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut slots = FileSlots::new(dir.path());

        assert_eq!(slots.load(Slot::Content), None);
        slots.save(Slot::Content, r#"{"tagline":"x"}"#).unwrap();
        slots.save(Slot::Mode, "dark").unwrap();

        assert_eq!(
            slots.load(Slot::Content).as_deref(),
            Some(r#"{"tagline":"x"}"#)
        );
        assert_eq!(slots.load(Slot::Mode).as_deref(), Some("dark"));

        // Files land under the directory with their slot names.
        assert!(dir.path().join("content.json").exists());
        assert!(dir.path().join("mode").exists());
    }

    #[test]
    fn file_slots_creates_missing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("state").join("site");
        let mut slots = FileSlots::new(&nested);

        slots.save(Slot::Mode, "light").unwrap();
        assert_eq!(slots.load(Slot::Mode).as_deref(), Some("light"));
    }

    #[test]
    fn slot_error_names_the_slot() {
        let err = SlotError {
            slot: Slot::Content.key(),
            source: io::Error::new(io::ErrorKind::Other, "quota exceeded"),
        };
        let message = err.to_string();
        assert!(message.contains("content"));
        assert!(message.contains("quota exceeded"));
    }
}
