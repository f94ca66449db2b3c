//! The content store: snapshot ownership, mutation operations, persistence
//! wiring, and live side-effect application.
//!
//! [`ContentStore`] is an explicitly constructed instance the application
//! composition root owns and hands to consumers — there is no hidden
//! module-level singleton. Cloning a store is cheap and yields a handle to
//! the same shared state, which is how the admin editor and the page
//! renderers see one snapshot.
//!
//! Every mutation follows the same shape: compute the fully merged next
//! snapshot, apply its visual side effects through the [`ThemeSink`],
//! persist best-effort, swap the snapshot in, then notify subscribers. The
//! sink runs before observers, so a renderer can never see `primary`
//! updated while `primaryForeground` is still stale.
//!
//! # Example
//!
//! ```rust
//! use sitedeck_store::{ContentPatch, ContentStore, MemorySlots, NullSink};
//!
//! let store = ContentStore::initialize(MemorySlots::new(), NullSink);
//! store.update(ContentPatch {
//!     tagline: Some("Lending, but friendly".into()),
//!     ..Default::default()
//! });
//! assert_eq!(store.read().tagline, "Lending, but friendly");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::content::{ColorMode, ContentPatch, SiteContent, ThemePatch};
use crate::persist::{Slot, SlotStore};
use crate::sink::ThemeSink;

type Subscriber = Rc<dyn Fn(&SiteContent)>;

struct StoreState {
    snapshot: SiteContent,
    slots: Box<dyn SlotStore>,
    sink: Box<dyn ThemeSink>,
    subscribers: Vec<Subscriber>,
}

/// Shared handle to the site content store.
///
/// All operations are synchronous and infallible by contract: malformed
/// persisted data falls back to compiled defaults, and write failures are
/// logged and swallowed while the in-memory snapshot stays authoritative.
#[derive(Clone)]
pub struct ContentStore {
    state: Rc<RefCell<StoreState>>,
}

impl ContentStore {
    /// Builds the store from its durable slots and a theme sink.
    ///
    /// Loads the content slot and shallow-merges it over compiled defaults
    /// (loaded fields win); absence or a parse failure falls back to the
    /// defaults with a warning. The independently persisted mode slot, if
    /// present, takes precedence over the mode embedded in the blob. The
    /// resulting mode and any set theme roles are applied to the sink
    /// immediately, so the first render already sees the saved theme.
    pub fn initialize(slots: impl SlotStore + 'static, sink: impl ThemeSink + 'static) -> Self {
        let slots: Box<dyn SlotStore> = Box::new(slots);
        let mut sink: Box<dyn ThemeSink> = Box::new(sink);

        let mut snapshot = match slots.load(Slot::Content) {
            Some(raw) => match serde_json::from_str::<SiteContent>(&raw) {
                Ok(loaded) => loaded,
                Err(err) => {
                    log::warn!("discarding unreadable content slot: {err}");
                    SiteContent::default()
                }
            },
            None => SiteContent::default(),
        };

        if let Some(token) = slots.load(Slot::Mode) {
            match ColorMode::from_token(token.trim()) {
                Some(mode) => snapshot.mode = mode,
                None => log::warn!("ignoring unknown mode slot token {token:?}"),
            }
        }

        sink.apply_mode(snapshot.mode);
        for (role, value) in snapshot.theme.applied_roles() {
            sink.apply_color(role, value);
        }

        ContentStore {
            state: Rc::new(RefCell::new(StoreState {
                snapshot,
                slots,
                sink,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Returns the current snapshot. Always fully populated, never partial.
    pub fn read(&self) -> SiteContent {
        self.state.borrow().snapshot.clone()
    }

    /// Merges a partial update onto the current snapshot.
    ///
    /// Theme base colors in the patch are normalized; their foregrounds and
    /// the focus ring are derived and applied to the sink together with
    /// them. A patched `mode` is applied as the global flag. The merged
    /// snapshot is written to the content slot (best-effort) and becomes
    /// the new current value.
    pub fn update(&self, mut patch: ContentPatch) {
        let (snapshot, subscribers) = {
            let mut state = self.state.borrow_mut();
            let state = &mut *state;

            let mode_change = patch.mode;
            let theme_patch = patch.theme.take();

            let mut next = state.snapshot.clone().merged(patch);
            let applied = theme_patch
                .map(|tp| next.theme.apply_patch(&tp))
                .unwrap_or_default();

            for (role, value) in &applied {
                state.sink.apply_color(*role, value);
            }
            if let Some(mode) = mode_change {
                state.sink.apply_mode(mode);
            }

            persist_content(state.slots.as_mut(), &next);
            state.snapshot = next;
            (state.snapshot.clone(), state.subscribers.clone())
        };
        notify(&subscribers, &snapshot);
    }

    /// Flips between light and dark mode.
    ///
    /// Applies the global flag, persists the new token to the mode slot
    /// (independent of the content blob), and updates the snapshot.
    pub fn toggle_mode(&self) {
        Self::toggle_in(&self.state);
    }

    /// Applies theme colors without going through a full content update.
    ///
    /// Side effects are always applied; the content slot is only written
    /// when `persist` is true. With `persist = false` this supports
    /// ephemeral live-preview recoloring: the running process shows the
    /// color, but a restart falls back to the last committed theme.
    pub fn set_theme_colors(&self, patch: ThemePatch, persist: bool) {
        let (snapshot, subscribers) = {
            let mut state = self.state.borrow_mut();
            let state = &mut *state;

            let mut next = state.snapshot.clone();
            let applied = next.theme.apply_patch(&patch);

            for (role, value) in &applied {
                state.sink.apply_color(*role, value);
            }
            if persist {
                persist_content(state.slots.as_mut(), &next);
            }

            state.snapshot = next;
            (state.snapshot.clone(), state.subscribers.clone())
        };
        notify(&subscribers, &snapshot);
    }

    /// Registers an observer invoked after every mutation with the fully
    /// merged snapshot. Observers live as long as the store.
    pub fn subscribe(&self, f: impl Fn(&SiteContent) + 'static) {
        self.state.borrow_mut().subscribers.push(Rc::new(f));
    }

    /// Hands out a toggle handle for consumers that should be able to
    /// request a mode flip without holding the store itself (the navbar's
    /// theme button, for instance). Invoking the handle is identical to
    /// calling [`toggle_mode`](Self::toggle_mode).
    pub fn mode_toggle(&self) -> ModeToggle {
        ModeToggle {
            state: Rc::downgrade(&self.state),
        }
    }

    fn toggle_in(state: &Rc<RefCell<StoreState>>) {
        let (snapshot, subscribers) = {
            let mut state = state.borrow_mut();
            let state = &mut *state;

            let mode = state.snapshot.mode.toggled();
            state.snapshot.mode = mode;
            state.sink.apply_mode(mode);
            if let Err(err) = state.slots.save(Slot::Mode, mode.as_token()) {
                log::warn!("mode slot write failed, keeping in-memory value: {err}");
            }
            (state.snapshot.clone(), state.subscribers.clone())
        };
        notify(&subscribers, &snapshot);
    }
}

impl fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ContentStore")
            .field("mode", &state.snapshot.mode)
            .field("subscriber_count", &state.subscribers.len())
            .finish()
    }
}

/// A detached handle that requests a mode flip on the owning store.
///
/// Replaces the ambient "toggle-theme" broadcast of event-bus designs with
/// an explicit, traceable capability. Handles hold a weak reference: once
/// the store is dropped, [`request`](Self::request) becomes a no-op.
#[derive(Clone)]
pub struct ModeToggle {
    state: Weak<RefCell<StoreState>>,
}

impl ModeToggle {
    /// Requests a mode flip. Equivalent to `store.toggle_mode()`.
    pub fn request(&self) {
        if let Some(state) = self.state.upgrade() {
            ContentStore::toggle_in(&state);
        }
    }
}

impl fmt::Debug for ModeToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeToggle")
            .field("live", &(self.state.strong_count() > 0))
            .finish()
    }
}

fn persist_content(slots: &mut dyn SlotStore, snapshot: &SiteContent) {
    match serde_json::to_string(snapshot) {
        Ok(raw) => {
            if let Err(err) = slots.save(Slot::Content, &raw) {
                log::warn!("content slot write failed, keeping in-memory snapshot: {err}");
            }
        }
        Err(err) => log::warn!("content snapshot did not serialize: {err}"),
    }
}

fn notify(subscribers: &[Subscriber], snapshot: &SiteContent) {
    for subscriber in subscribers {
        subscriber(snapshot);
    }
}
