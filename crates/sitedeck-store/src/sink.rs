//! Theme application seam.
//!
//! The store never touches a rendering surface directly. Every visual side
//! effect goes through [`ThemeSink`]: one call per color role override and
//! one for the global light/dark flag. A web target backs this with CSS
//! custom properties and a root class; tests back it with a recording
//! double. The store core stays platform-agnostic either way.

use crate::content::ColorMode;

/// The color roles a theme can override.
///
/// Each role maps to one live style variable consumed by the rendered
/// markup. Foreground roles are always derived from their base color, never
/// authored directly (see [`crate::content::ThemePatch`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Ring,
}

impl ColorRole {
    /// The CSS custom-property name for this role.
    pub fn css_var(self) -> &'static str {
        match self {
            ColorRole::Primary => "--primary",
            ColorRole::PrimaryForeground => "--primary-foreground",
            ColorRole::Secondary => "--secondary",
            ColorRole::SecondaryForeground => "--secondary-foreground",
            ColorRole::Ring => "--ring",
        }
    }
}

/// Receiver for live theme side effects.
///
/// Implementations must be cheap and infallible: the store applies effects
/// synchronously inside every mutating operation, and the side-effect
/// contract promises renderers never observe a half-applied theme.
pub trait ThemeSink {
    /// Applies a color-role override. `value` is normally an HSL triplet,
    /// but unsupported input formats are passed along verbatim.
    fn apply_color(&mut self, role: ColorRole, value: &str);

    /// Applies the global light/dark presentation flag.
    fn apply_mode(&mut self, mode: ColorMode);
}

/// A sink that discards every effect. Useful for headless runs and tests
/// that only care about store state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ThemeSink for NullSink {
    fn apply_color(&mut self, _role: ColorRole, _value: &str) {}
    fn apply_mode(&mut self, _mode: ColorMode) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_var_names() {
        assert_eq!(ColorRole::Primary.css_var(), "--primary");
        assert_eq!(
            ColorRole::PrimaryForeground.css_var(),
            "--primary-foreground"
        );
        assert_eq!(ColorRole::Secondary.css_var(), "--secondary");
        assert_eq!(
            ColorRole::SecondaryForeground.css_var(),
            "--secondary-foreground"
        );
        assert_eq!(ColorRole::Ring.css_var(), "--ring");
    }

    #[test]
    fn null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.apply_color(ColorRole::Primary, "221 83% 25%");
        sink.apply_mode(ColorMode::Dark);
    }
}
