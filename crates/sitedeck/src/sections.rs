//! Page sections rendered from the content snapshot.
//!
//! Every template reads the camelCase serialization of
//! [`SiteContent`], so the fields available here are exactly the fields
//! the admin editor can change. Image fields fall back to bundled assets
//! when the stored value is empty.

use minijinja::{context, Environment, Value};
use sitedeck_store::SiteContent;

use crate::css::CssVariableSink;
use crate::error::SiteError;

/// The sections of the marketing page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Navbar,
    Hero,
    About,
    Services,
    Verification,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Navbar,
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Verification,
        Section::Contact,
        Section::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Navbar => "navbar",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Verification => "verification",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Section::Navbar => NAVBAR,
            Section::Hero => HERO,
            Section::About => ABOUT,
            Section::Services => SERVICES,
            Section::Verification => VERIFICATION,
            Section::Contact => CONTACT,
            Section::Footer => FOOTER,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const NAVBAR: &str = r#"<nav class="navbar">
  <a class="brand" href="/">
    <img src="{{ logoUrl if logoUrl else "/assets/logo.svg" }}" alt="{{ companyName }}" />
    <span>{{ companyName }}</span>
  </a>
  <a class="apply" href="{{ applyUrl if applyUrl else website }}">Apply Now</a>
</nav>"#;

const HERO: &str = r#"<header class="hero" id="home">
  <img class="hero-bg" src="{{ heroImageUrl if heroImageUrl else "/assets/office-1.png" }}" alt="" />
  <h1>{{ heroTitle }}</h1>
  <p>{{ heroSubtitle }}</p>
  <a class="cta" href="{{ applyUrl if applyUrl else website }}">Apply for a Loan</a>
</header>"#;

const ABOUT: &str = r#"<section class="about" id="about">
  <h2>About {{ companyName }}</h2>
  <img src="{{ aboutImageUrl if aboutImageUrl else "/assets/office-2.png" }}" alt="Our office" />
  <p>{{ aboutText }}</p>
</section>"#;

const SERVICES: &str = r#"<section class="services" id="services">
  <h2>Our Services</h2>
  <ul>
    <li>
      <h3>Personal Loans</h3>
      <p>Quick approval with flexible repayment terms tailored to you.</p>
    </li>
    <li>
      <h3>Business Loans</h3>
      <p>Capital to start or grow your business, with transparent rates.</p>
    </li>
    <li>
      <h3>Salary Loans</h3>
      <p>Bridge the gap between paydays without hidden charges.</p>
    </li>
  </ul>
</section>"#;

const VERIFICATION: &str = r#"<section class="verification" id="verification">
  <h2>Registered &amp; Certified</h2>
  <dl>
    <dt>Company</dt>
    <dd>{{ companyName }}</dd>
    <dt>SEC Registration No.</dt>
    <dd>{{ secNumber }}</dd>
    <dt>Certificate of Authority</dt>
    <dd>{{ certAuthority }}</dd>
    <dt>Registration Date</dt>
    <dd>{{ registrationDate }}</dd>
  </dl>
  <a href="{{ secVerifyUrl }}">Verify with the SEC</a>
</section>"#;

const CONTACT: &str = r#"<section class="contact" id="contact">
  <h2>Contact Us</h2>
  <address>
    <p>{{ address }}</p>
    <p>{{ plusCode }}</p>
    <a href="{{ googleMapsUrl }}">View on Google Maps</a>
  </address>
  <p><a href="mailto:{{ email }}">{{ email }}</a></p>
  <p><a href="{{ website }}">{{ website }}</a></p>
</section>"#;

const FOOTER: &str = r#"<footer>
  <p>{{ companyName }} &mdash; {{ tagline }}</p>
  <p>SEC Reg. {{ secNumber }} &middot; {{ certAuthority }}</p>
</footer>"#;

const PAGE: &str = r#"<!DOCTYPE html>
<html class="{{ rootClass }}">
<head>
  <meta charset="utf-8" />
  <title>{{ title }}</title>
  {% if styleBlock %}<style>
{{ styleBlock }}
  </style>{% endif %}
</head>
<body>
{{ body }}
</body>
</html>"#;

/// Renders page sections and the full page shell from a content snapshot.
pub struct SitePages {
    env: Environment<'static>,
}

impl SitePages {
    pub fn new() -> Result<Self, SiteError> {
        let mut env = Environment::new();
        for section in Section::ALL {
            env.add_template(section.name(), section.template())?;
        }
        env.add_template("page", PAGE)?;
        Ok(Self { env })
    }

    /// Renders one section against the snapshot.
    pub fn render_section(
        &self,
        section: Section,
        content: &SiteContent,
    ) -> Result<String, SiteError> {
        let tmpl = self.env.get_template(section.name())?;
        Ok(tmpl.render(Value::from_serialize(content))?)
    }

    /// Renders the whole page: every section in order, wrapped in the
    /// document shell with the sink's live style block and root class.
    pub fn render_page(
        &self,
        content: &SiteContent,
        sink: &CssVariableSink,
    ) -> Result<String, SiteError> {
        let mut body = String::new();
        for section in Section::ALL {
            body.push_str(&self.render_section(section, content)?);
            body.push('\n');
        }

        let tmpl = self.env.get_template("page")?;
        Ok(tmpl.render(context! {
            title => content.company_name,
            body => body,
            styleBlock => sink.style_block(),
            rootClass => sink.root_class(),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_uses_content_fields() {
        let pages = SitePages::new().unwrap();
        let content = SiteContent::default();
        let html = pages.render_section(Section::Hero, &content).unwrap();
        assert!(html.contains(&content.hero_title));
        assert!(html.contains("/assets/office-1.png"));
    }

    #[test]
    fn navbar_falls_back_to_bundled_logo() {
        let pages = SitePages::new().unwrap();
        let mut content = SiteContent::default();
        let html = pages.render_section(Section::Navbar, &content).unwrap();
        assert!(html.contains("/assets/logo.svg"));

        content.logo_url = "/uploads/logo.png".into();
        let html = pages.render_section(Section::Navbar, &content).unwrap();
        assert!(html.contains("/uploads/logo.png"));
        assert!(!html.contains("/assets/logo.svg"));
    }

    #[test]
    fn verification_shows_registration_details() {
        let pages = SitePages::new().unwrap();
        let content = SiteContent::default();
        let html = pages
            .render_section(Section::Verification, &content)
            .unwrap();
        assert!(html.contains(&content.sec_number));
        assert!(html.contains(&content.cert_authority));
        assert!(html.contains(&content.registration_date));
        assert!(html.contains(&content.sec_verify_url));
    }

    #[test]
    fn page_includes_every_section_and_style_block() {
        let pages = SitePages::new().unwrap();
        let sink = CssVariableSink::new();
        let html = pages
            .render_page(&SiteContent::default(), &sink)
            .unwrap();
        assert!(html.contains("<nav"));
        assert!(html.contains("<footer"));
        // No overrides applied yet, so no style element either.
        assert!(!html.contains("<style>"));
    }
}
