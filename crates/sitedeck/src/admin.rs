//! Admin editing surface over the content store.
//!
//! The panel addresses text fields by their serialized camelCase name, the
//! same name the persisted blob and the templates use, so an editing UI can
//! be generated from [`EDITABLE_FIELDS`] without hardcoding the schema
//! twice.

use sitedeck_store::{ContentPatch, ContentStore, SiteContent, ThemePatch};
use thiserror::Error;

/// The text fields an admin can edit, in display order.
pub const EDITABLE_FIELDS: [&str; 18] = [
    "companyName",
    "tagline",
    "heroTitle",
    "heroSubtitle",
    "aboutText",
    "address",
    "plusCode",
    "googleMapsUrl",
    "email",
    "website",
    "applyUrl",
    "secNumber",
    "certAuthority",
    "registrationDate",
    "secVerifyUrl",
    "logoUrl",
    "heroImageUrl",
    "aboutImageUrl",
];

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Editing operations bound to one store.
#[derive(Debug, Clone)]
pub struct AdminPanel {
    store: ContentStore,
}

impl AdminPanel {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn content(&self) -> SiteContent {
        self.store.read()
    }

    /// Sets one text field by its camelCase name and commits.
    pub fn set_field(&self, field: &str, value: impl Into<String>) -> Result<(), AdminError> {
        let value = Some(value.into());
        let mut patch = ContentPatch::new();
        match field {
            "companyName" => patch.company_name = value,
            "tagline" => patch.tagline = value,
            "heroTitle" => patch.hero_title = value,
            "heroSubtitle" => patch.hero_subtitle = value,
            "aboutText" => patch.about_text = value,
            "address" => patch.address = value,
            "plusCode" => patch.plus_code = value,
            "googleMapsUrl" => patch.google_maps_url = value,
            "email" => patch.email = value,
            "website" => patch.website = value,
            "applyUrl" => patch.apply_url = value,
            "secNumber" => patch.sec_number = value,
            "certAuthority" => patch.cert_authority = value,
            "registrationDate" => patch.registration_date = value,
            "secVerifyUrl" => patch.sec_verify_url = value,
            "logoUrl" => patch.logo_url = value,
            "heroImageUrl" => patch.hero_image_url = value,
            "aboutImageUrl" => patch.about_image_url = value,
            other => return Err(AdminError::UnknownField(other.to_string())),
        }
        self.store.update(patch);
        Ok(())
    }

    /// Applies colors live without writing them to storage. Used while the
    /// admin is still picking.
    pub fn preview_colors(&self, patch: ThemePatch) {
        self.store.set_theme_colors(patch, false);
    }

    /// Applies colors and commits them.
    pub fn save_colors(&self, patch: ThemePatch) {
        self.store.set_theme_colors(patch, true);
    }

    pub fn toggle_mode(&self) {
        self.store.toggle_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedeck_store::{ContentStore, MemorySlots, NullSink};

    fn panel() -> AdminPanel {
        AdminPanel::new(ContentStore::initialize(MemorySlots::new(), NullSink))
    }

    #[test]
    fn every_listed_field_is_settable() {
        let panel = panel();
        for field in EDITABLE_FIELDS {
            panel
                .set_field(field, format!("value for {field}"))
                .unwrap();
        }
        let content = panel.content();
        assert_eq!(content.company_name, "value for companyName");
        assert_eq!(content.about_image_url, "value for aboutImageUrl");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let panel = panel();
        let err = panel.set_field("heroColor", "red").unwrap_err();
        assert!(matches!(err, AdminError::UnknownField(f) if f == "heroColor"));
    }

    #[test]
    fn field_edit_leaves_the_rest_alone() {
        let panel = panel();
        panel.set_field("tagline", "Edited").unwrap();
        let content = panel.content();
        assert_eq!(content.tagline, "Edited");
        assert_eq!(content.email, SiteContent::default().email);
    }

    #[test]
    fn preview_and_save_both_recolor() {
        let panel = panel();
        panel.preview_colors(ThemePatch::new().primary("#1a1a2e"));
        assert_eq!(
            panel.content().theme.primary.as_deref(),
            Some("240 28% 14%")
        );
        panel.save_colors(ThemePatch::new().secondary("#000000"));
        assert_eq!(panel.content().theme.secondary.as_deref(), Some("0 0% 0%"));
    }
}
