//! # Sitedeck - Marketing Site Rendering & Admin Editing
//!
//! `sitedeck` turns the configuration held by [`sitedeck_store`] into a
//! rendered marketing page, and exposes the editing surface an admin UI
//! sits on. The store stays the single source of truth; this crate adds
//! the web-facing pieces around it:
//!
//! - [`SitePages`]: minijinja templates for every page section
//! - [`CssVariableSink`]: the [`ThemeSink`](sitedeck_store::ThemeSink)
//!   implementation that collects CSS variable overrides and the dark-mode
//!   class for the document root
//! - [`AdminPanel`]: name-addressed field editing plus color preview/save
//!
//! ## Quick Start
//!
//! ```rust
//! use sitedeck::{AdminPanel, CssVariableSink, SitePages};
//! use sitedeck_store::{ContentStore, MemorySlots, ThemePatch};
//!
//! let sink = CssVariableSink::new();
//! let store = ContentStore::initialize(MemorySlots::new(), sink.clone());
//! let panel = AdminPanel::new(store.clone());
//!
//! panel.set_field("heroTitle", "Borrow with confidence").unwrap();
//! panel.save_colors(ThemePatch::new().primary("#1a1a2e"));
//!
//! let pages = SitePages::new().unwrap();
//! let html = pages.render_page(&store.read(), &sink).unwrap();
//! assert!(html.contains("Borrow with confidence"));
//! assert!(html.contains("--primary: 240 28% 14%;"));
//! ```

pub mod admin;
pub mod css;
pub mod error;
pub mod sections;

pub use admin::{AdminError, AdminPanel, EDITABLE_FIELDS};
pub use css::CssVariableSink;
pub use error::SiteError;
pub use sections::{Section, SitePages};

pub use sitedeck_store as store;
