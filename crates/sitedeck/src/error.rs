//! Error type for page rendering.

use thiserror::Error;

/// Error produced while rendering site sections.
///
/// Template failures are programming errors (a template referencing a
/// field that does not exist), surfaced rather than swallowed so they are
/// caught in development.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
