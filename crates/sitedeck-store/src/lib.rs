//! # Sitedeck Store - Site Content & Theme State
//!
//! `sitedeck-store` holds the single configuration aggregate behind a
//! marketing site: company copy, contact data, image references, and a
//! color theme. The store supports runtime editing, persists across
//! restarts, and drives live recoloring through a pluggable theme sink —
//! no re-render logic required.
//!
//! ## Core Concepts
//!
//! - [`SiteContent`]: the always-complete configuration snapshot
//! - [`ContentStore`]: owns the snapshot and exposes the mutation
//!   operations (`update`, `toggle_mode`, `set_theme_colors`)
//! - [`ThemeSink`]: the platform seam that receives style side effects
//! - [`SlotStore`]: durable storage for the content blob and mode flag
//! - [`color`]: hex → HSL triplet normalization and foreground derivation
//!
//! ## Quick Start
//!
//! ```rust
//! use sitedeck_store::{
//!     ContentPatch, ContentStore, MemorySlots, NullSink, ThemePatch,
//! };
//!
//! let store = ContentStore::initialize(MemorySlots::new(), NullSink);
//!
//! // Edit copy.
//! store.update(ContentPatch {
//!     hero_title: Some("Loans without the drama".into()),
//!     ..Default::default()
//! });
//!
//! // Recolor the brand; the foreground and focus ring are derived.
//! store.set_theme_colors(ThemePatch::new().primary("#1a1a2e"), true);
//!
//! let content = store.read();
//! assert_eq!(content.hero_title, "Loans without the drama");
//! assert_eq!(content.theme.primary.as_deref(), Some("240 28% 14%"));
//! assert_eq!(content.theme.ring, content.theme.primary);
//! ```
//!
//! ## Persistence Model
//!
//! Two independent durable slots: `content` (the full JSON aggregate,
//! written on committed updates) and `mode` (the `light`/`dark` token,
//! written on every toggle). Loading merges the blob shallowly over
//! compiled defaults; the mode slot wins over the blob's embedded mode.
//! All failure handling degrades to best-effort defaults — a corrupt blob
//! or a full disk never takes the site down.
//!
//! ## Error Philosophy
//!
//! Store operations do not return errors. Malformed persisted data is
//! discarded with a `log` warning; write failures are swallowed the same
//! way and the in-memory snapshot remains the source of truth for the rest
//! of the process lifetime.

pub mod color;
pub mod content;
pub mod persist;
pub mod sink;
pub mod store;

pub use content::{ColorMode, ContentPatch, SiteContent, Theme, ThemePatch};
pub use persist::{FileSlots, MemorySlots, Slot, SlotError, SlotStore};
pub use sink::{ColorRole, NullSink, ThemeSink};
pub use store::{ContentStore, ModeToggle};
