//! Color normalization for theme values.
//!
//! Theme colors are stored and applied as HSL triplets of the form
//! `"221 83% 25%"` — the only encoding the style layer understands. Hex
//! input (`#1a1a2e` or the `#1a2` shorthand) is converted on the way in;
//! values that already look like a triplet pass through untouched, which
//! makes [`to_triplet`] idempotent.
//!
//! Anything else (`rgb(...)`, color names, malformed hex) also passes
//! through verbatim. That is a deliberate lenient fallback rather than a
//! validation failure: unsupported formats are applied as given, and
//! [`foreground_for`] refuses to derive from them so no stale contrast
//! color is ever written.

/// Foreground triplet used on top of dark colors.
pub const LIGHT_FOREGROUND: &str = "210 40% 98%";

/// Foreground triplet used on top of light colors.
pub const DARK_FOREGROUND: &str = "222 47% 11%";

/// Normalizes a color value into the `"H S% L%"` triplet form.
///
/// - Empty input is returned unchanged (callers treat it as "no override").
/// - `#rgb` / `#rrggbb` hex is converted to an integer HSL triplet.
/// - Everything else is returned unchanged.
///
/// # Example
///
/// ```rust
/// use sitedeck_store::color::to_triplet;
///
/// assert_eq!(to_triplet("#ff0000"), "0 100% 50%");
/// assert_eq!(to_triplet("221 83% 25%"), "221 83% 25%");
/// assert_eq!(to_triplet("rgb(1, 2, 3)"), "rgb(1, 2, 3)");
/// ```
pub fn to_triplet(input: &str) -> String {
    let value = input.trim();
    if value.is_empty() {
        return input.to_string();
    }

    if let Some(hex) = value.strip_prefix('#') {
        if let Some((r, g, b)) = parse_hex(hex) {
            let (h, s, l) = hsl_from_rgb(r, g, b);
            return format!("{} {}% {}%", h, s, l);
        }
    }

    // Triplets and unsupported formats alike pass through.
    value.to_string()
}

/// Picks a readable foreground for the given triplet.
///
/// Uses the trailing lightness percentage: below 50 the light foreground
/// token is returned, otherwise the dark one. This is a discrete midpoint
/// threshold, not a WCAG contrast-ratio computation — good enough for a
/// two-token foreground palette, and cheap.
///
/// Returns `None` when the value has no trailing `%` token (empty input or
/// an unsupported format that passed through [`to_triplet`] unnormalized).
pub fn foreground_for(triplet: &str) -> Option<&'static str> {
    let value = triplet.trim().strip_suffix('%')?;
    let lightness: u32 = value
        .rsplit(|c: char| c.is_whitespace())
        .next()?
        .parse()
        .ok()?;
    if lightness < 50 {
        Some(LIGHT_FOREGROUND)
    } else {
        Some(DARK_FOREGROUND)
    }
}

/// Parses a hex color body (without the `#`), expanding 3-digit shorthand.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Converts 8-bit RGB channels to integer HSL components.
///
/// Standard min/max-channel algorithm. Hue is 0 for achromatic colors and
/// wrapped to 0–359 otherwise (rounding can land exactly on 360).
fn hsl_from_rgb(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0, 0, (l * 100.0).round() as u8);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    let h = ((h * 60.0).round() as u16) % 360;
    (h, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
}
