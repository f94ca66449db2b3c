//! Web-target theme adapter: CSS custom properties plus a root class.
//!
//! [`CssVariableSink`] is the platform half of the store's side-effect
//! contract. The store pushes color-role overrides and the light/dark flag
//! into it; the page shell reads the accumulated state back out as a
//! `:root { ... }` style block and a `dark` class on the document root.
//!
//! The sink is a cheap cloneable handle over shared state, so one clone
//! goes into [`ContentStore::initialize`](sitedeck_store::ContentStore)
//! while the renderer keeps another.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::rc::Rc;

use sitedeck_store::{ColorMode, ColorRole, ThemeSink};

#[derive(Debug, Default)]
struct CssState {
    // BTreeMap keeps the emitted block stable across runs.
    overrides: BTreeMap<&'static str, String>,
    dark: bool,
}

/// Accumulates live style state for the rendered page shell.
#[derive(Debug, Clone, Default)]
pub struct CssVariableSink {
    state: Rc<RefCell<CssState>>,
}

impl CssVariableSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `:root` style block for the current overrides, or an empty
    /// string when no role has been applied.
    pub fn style_block(&self) -> String {
        let state = self.state.borrow();
        if state.overrides.is_empty() {
            return String::new();
        }
        let mut block = String::from(":root {\n");
        for (var, value) in &state.overrides {
            let _ = writeln!(block, "  {}: {};", var, value);
        }
        block.push('}');
        block
    }

    /// The class for the document root: `"dark"` in dark mode, empty
    /// otherwise.
    pub fn root_class(&self) -> &'static str {
        if self.state.borrow().dark {
            "dark"
        } else {
            ""
        }
    }

    /// The currently applied override for one CSS variable, if any.
    pub fn get(&self, var: &str) -> Option<String> {
        self.state.borrow().overrides.get(var).cloned()
    }
}

impl ThemeSink for CssVariableSink {
    fn apply_color(&mut self, role: ColorRole, value: &str) {
        self.state
            .borrow_mut()
            .overrides
            .insert(role.css_var(), value.to_string());
    }

    fn apply_mode(&mut self, mode: ColorMode) {
        self.state.borrow_mut().dark = mode.is_dark();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sink_emits_nothing() {
        let sink = CssVariableSink::new();
        assert_eq!(sink.style_block(), "");
        assert_eq!(sink.root_class(), "");
    }

    #[test]
    fn style_block_lists_applied_roles() {
        let mut sink = CssVariableSink::new();
        sink.apply_color(ColorRole::Primary, "240 28% 14%");
        sink.apply_color(ColorRole::Ring, "240 28% 14%");

        let block = sink.style_block();
        assert!(block.starts_with(":root {"));
        assert!(block.contains("--primary: 240 28% 14%;"));
        assert!(block.contains("--ring: 240 28% 14%;"));
        assert!(block.ends_with('}'));
    }

    #[test]
    fn reapplying_a_role_overwrites_it() {
        let mut sink = CssVariableSink::new();
        sink.apply_color(ColorRole::Primary, "0 0% 0%");
        sink.apply_color(ColorRole::Primary, "0 0% 100%");
        assert_eq!(sink.get("--primary").as_deref(), Some("0 0% 100%"));
    }

    #[test]
    fn mode_controls_root_class() {
        let mut sink = CssVariableSink::new();
        sink.apply_mode(ColorMode::Dark);
        assert_eq!(sink.root_class(), "dark");
        sink.apply_mode(ColorMode::Light);
        assert_eq!(sink.root_class(), "");
    }

    #[test]
    fn clones_share_state() {
        let sink = CssVariableSink::new();
        let mut writer = sink.clone();
        writer.apply_color(ColorRole::Secondary, "199 89% 48%");
        assert_eq!(sink.get("--secondary").as_deref(), Some("199 89% 48%"));
    }
}
