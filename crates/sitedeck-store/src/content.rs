//! The site content aggregate and its patch types.
//!
//! [`SiteContent`] is the single configuration object every page section
//! reads: company copy, contact data, image references, and the color
//! theme. It is always fully populated — compiled defaults fill anything a
//! persisted blob omits — and mutations replace the snapshot wholesale via
//! [`SiteContent::merged`] rather than editing it in place.
//!
//! Serialization uses camelCase field names, so the persisted JSON blob
//! matches what the admin editor and templates see.

use serde::{Deserialize, Serialize};

use crate::color;
use crate::sink::ColorRole;

/// Global light/dark presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Token form used by the persisted mode slot.
    pub fn as_token(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Parses the persisted token form. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }
}

/// Theme color-role overrides.
///
/// `None` (or an empty string from older blobs) means "no override — use
/// the compiled stylesheet default" for that role. Set values are HSL
/// triplets, except for unsupported input formats which are carried
/// verbatim (and never get a derived foreground).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring: Option<String>,
}

impl Theme {
    /// The roles currently set to a non-empty value, in application order.
    pub fn applied_roles(&self) -> Vec<(ColorRole, &str)> {
        let fields = [
            (ColorRole::Primary, &self.primary),
            (ColorRole::PrimaryForeground, &self.primary_foreground),
            (ColorRole::Secondary, &self.secondary),
            (ColorRole::SecondaryForeground, &self.secondary_foreground),
            (ColorRole::Ring, &self.ring),
        ];
        fields
            .into_iter()
            .filter_map(|(role, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((role, v)),
                _ => None,
            })
            .collect()
    }

    /// Applies an authored patch: normalizes base colors, derives the
    /// matching foregrounds, and mirrors `primary` into `ring`.
    ///
    /// Returns the `(role, value)` pairs that changed, in the order they
    /// must reach the sink. Unsupported color formats are stored verbatim
    /// and produce no foreground derivation.
    pub fn apply_patch(&mut self, patch: &ThemePatch) -> Vec<(ColorRole, String)> {
        let mut applied = Vec::new();

        if let Some(primary) = non_empty(&patch.primary) {
            let p = color::to_triplet(primary);
            self.primary = Some(p.clone());
            applied.push((ColorRole::Primary, p.clone()));
            if let Some(fg) = color::foreground_for(&p) {
                self.primary_foreground = Some(fg.to_string());
                applied.push((ColorRole::PrimaryForeground, fg.to_string()));
            }
            // The focus ring follows the brand color.
            self.ring = Some(p.clone());
            applied.push((ColorRole::Ring, p));
        }

        if let Some(secondary) = non_empty(&patch.secondary) {
            let s = color::to_triplet(secondary);
            let fg = color::foreground_for(&s);
            self.secondary = Some(s.clone());
            applied.push((ColorRole::Secondary, s));
            if let Some(fg) = fg {
                self.secondary_foreground = Some(fg.to_string());
                applied.push((ColorRole::SecondaryForeground, fg.to_string()));
            }
        }

        applied
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Authored theme changes.
///
/// Only the base colors are authorable; foregrounds and the focus ring are
/// always derived so text on a colored surface stays legible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

impl ThemePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary brand color (hex or triplet), returning `self`.
    pub fn primary(mut self, value: impl Into<String>) -> Self {
        self.primary = Some(value.into());
        self
    }

    /// Sets the secondary accent color (hex or triplet), returning `self`.
    pub fn secondary(mut self, value: impl Into<String>) -> Self {
        self.secondary = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}

/// The full site configuration aggregate.
///
/// Every field always holds a value; image URL fields use the empty string
/// as the "use the default asset" sentinel. Loading a partial persisted
/// blob keeps the compiled default for anything missing (`serde(default)`
/// gives shallow-merge-over-defaults semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub company_name: String,
    pub tagline: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_text: String,
    pub address: String,
    pub plus_code: String,
    pub google_maps_url: String,
    pub email: String,
    pub website: String,
    pub apply_url: String,
    pub sec_number: String,
    pub cert_authority: String,
    pub registration_date: String,
    pub sec_verify_url: String,
    pub logo_url: String,
    pub hero_image_url: String,
    pub about_image_url: String,
    pub mode: ColorMode,
    pub theme: Theme,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            company_name: "CREST OF NICE-J LENDING CORPORATION.".into(),
            tagline: "Your Trusted Financial Partner".into(),
            hero_title: "Fast, Secure & Legal Online Loans".into(),
            hero_subtitle: "SEC-registered and government-certified lending services in the \
                            Philippines. Get the financial support you need with complete peace \
                            of mind."
                .into(),
            about_text: "CREST OF NICE-J LENDING CORPORATION. operates legally under the \
                         supervision of the Securities and Exchange Commission (SEC) of the \
                         Philippines and is fully certified by the government to provide online \
                         loan services. We are committed to offering fast, secure, and reliable \
                         financial solutions to our clients. Our services are designed to meet \
                         your needs while ensuring compliance with all regulatory requirements, \
                         giving you the confidence and peace of mind you deserve when seeking \
                         financial assistance."
                .into(),
            address: "The Sapphire Residences Condominium Corporation 31st Street, corner 2nd \
                      Ave, Taguig, 1630 Metro Manila, Philippines"
                .into(),
            plus_code: "H23V+JW Taguig, Metro Manila, Philippines".into(),
            google_maps_url: "https://maps.app.goo.gl/BwGXopDfUxFM7kUL9".into(),
            email: "lendingph.info@gmail.com".into(),
            website: "https://www.fastlendingofficial-php.com/login".into(),
            apply_url: "https://www.fastlendingofficial-php.com/login".into(),
            sec_number: "CS201816600".into(),
            cert_authority: "NO: 2952".into(),
            registration_date: "April 22, 2019".into(),
            sec_verify_url: "https://checkwithsec.sec.gov.ph/".into(),
            logo_url: String::new(),
            hero_image_url: String::new(),
            about_image_url: String::new(),
            mode: ColorMode::Light,
            theme: Theme {
                primary: Some("221 83% 25%".into()),
                primary_foreground: Some("210 40% 98%".into()),
                secondary: Some("199 89% 48%".into()),
                secondary_foreground: Some("0 0% 100%".into()),
                ring: Some("221 83% 25%".into()),
            },
        }
    }
}

macro_rules! merge_fields {
    ($next:ident, $patch:ident: $($field:ident),+ $(,)?) => {
        $( if let Some(value) = $patch.$field { $next.$field = value; } )+
    };
}

impl SiteContent {
    /// Shallow-merges a patch onto this snapshot, returning the new value.
    ///
    /// Scalar fields and `mode` replace their counterparts; a theme patch
    /// goes through [`Theme::apply_patch`] so foregrounds and the ring stay
    /// derived.
    pub fn merged(mut self, patch: ContentPatch) -> SiteContent {
        merge_fields!(self, patch:
            company_name, tagline, hero_title, hero_subtitle, about_text,
            address, plus_code, google_maps_url, email, website, apply_url,
            sec_number, cert_authority, registration_date, sec_verify_url,
            logo_url, hero_image_url, about_image_url,
        );
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(theme) = &patch.theme {
            self.theme.apply_patch(theme);
        }
        self
    }
}

/// A partial update to [`SiteContent`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPatch {
    pub company_name: Option<String>,
    pub tagline: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub about_text: Option<String>,
    pub address: Option<String>,
    pub plus_code: Option<String>,
    pub google_maps_url: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub apply_url: Option<String>,
    pub sec_number: Option<String>,
    pub cert_authority: Option<String>,
    pub registration_date: Option<String>,
    pub sec_verify_url: Option<String>,
    pub logo_url: Option<String>,
    pub hero_image_url: Option<String>,
    pub about_image_url: Option<String>,
    pub mode: Option<ColorMode>,
    pub theme: Option<ThemePatch>,
}

impl ContentPatch {
    pub fn new() -> Self {
        Self::default()
    }
}
