//! `[site]` section configuration.
//!
//! Site identity: the base path the site is served under, the display
//! title, and the theme the external generator should render with.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Field paths for `[site]` diagnostics.
pub struct SiteFields {
    pub base: FieldPath,
    pub title: FieldPath,
    pub theme: FieldPath,
}

/// Site identity (base path, title, theme).
///
/// `title` carries no default: a config without it is rejected at
/// deserialization time, before validation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    /// URL path prefix under which the site is served.
    /// Slash-delimited on both ends, e.g. "/learn-wgpu-ko/".
    #[serde(default = "default_base")]
    pub base: String,

    /// Display name of the site.
    pub title: String,

    /// Identifier of the rendering theme. Resolution of the theme
    /// package happens in the external generator at build time.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_base() -> String {
    "/".into()
}

fn default_theme() -> String {
    "default".into()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base: default_base(),
            title: String::new(),
            theme: default_theme(),
        }
    }
}

impl SiteSection {
    pub const FIELDS: SiteFields = SiteFields {
        base: FieldPath::new("site.base"),
        title: FieldPath::new("site.title"),
        theme: FieldPath::new("site.theme"),
    };

    /// Validate site identity fields.
    ///
    /// # Checks
    /// - `base` is non-empty and slash-delimited on both ends
    /// - `title` is non-empty
    /// - `theme` is a well-formed package identifier
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.base.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.base,
                "must not be empty",
                "use \"/\" to serve from the site root",
            );
        } else {
            if !self.base.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.base,
                    format!("'{}' must start with `/`", self.base),
                    format!("use \"/{}\"", self.base.trim_matches('/')),
                );
            }
            if !self.base.ends_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.base,
                    format!("'{}' must end with `/` for path joining", self.base),
                    format!("use \"{}/\"", self.base),
                );
            }
        }

        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "must not be empty");
        }

        if self.theme.is_empty() {
            diag.error(Self::FIELDS.theme, "must not be empty");
        } else if !is_theme_ident(&self.theme) {
            diag.error_with_hint(
                Self::FIELDS.theme,
                format!("'{}' is not a valid theme identifier", self.theme),
                "use lowercase letters, digits, and `-`, e.g. \"thindark\"",
            );
        }
    }
}

/// Theme identifiers are lowercase alphanumeric with `-` separators.
fn is_theme_ident(name: &str) -> bool {
    !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
