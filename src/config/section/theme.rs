//! `[theme]` section configuration.
//!
//! Presentation metadata handed to the theme: the canonical domain used
//! for absolute URLs, author attribution, display flags, and the sidebar
//! navigation tree.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! domain = "/learn-wgpu-ko"
//! display_all_headers = false
//! last_updated = "Last Updated"
//! sidebar = ["/", { title = "초보자", collapsable = false, children = ["/beginner/tutorial1-window/"] }]
//!
//! [theme.author]
//! name = "Benjamin Hansen"
//! twitter = "https://twitter.com/sotrh760"
//! ```

use crate::config::section::sidebar::{self, NavEntry};
use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Field paths for `[theme]` diagnostics.
pub struct ThemeFields {
    pub domain: FieldPath,
    pub author_name: FieldPath,
    pub author_twitter: FieldPath,
}

/// Theme presentation settings and the navigation sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// Canonical site origin used to build absolute URLs.
    /// Either a root-relative prefix ("/learn-wgpu-ko") or an absolute
    /// http(s) URL ("https://example.com").
    pub domain: String,

    /// Static attribution metadata.
    pub author: AuthorConfig,

    /// Show every page heading in the sidebar, not just the active page's.
    pub display_all_headers: bool,

    /// Label text for the last-updated timestamp.
    pub last_updated: String,

    /// Navigation sidebar in display order.
    pub sidebar: Vec<NavEntry>,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            domain: String::new(),
            author: AuthorConfig::default(),
            display_all_headers: false,
            last_updated: "Last Updated".into(),
            sidebar: Vec::new(),
        }
    }
}

/// Author attribution shown by the theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    /// Author display name.
    pub name: String,

    /// Author twitter profile URL.
    pub twitter: Option<String>,
}

impl ThemeSection {
    pub const FIELDS: ThemeFields = ThemeFields {
        domain: FieldPath::new("theme.domain"),
        author_name: FieldPath::new("theme.author.name"),
        author_twitter: FieldPath::new("theme.author.twitter"),
    };

    /// Validate theme settings and the sidebar tree.
    ///
    /// # Checks
    /// - `domain` is empty (allowed: URLs degrade to bare paths), a
    ///   root-relative path, or a well-formed http(s) URL
    /// - `author.twitter` is a well-formed http(s) URL when set
    /// - sidebar shape checks (see [`sidebar::validate_sidebar`])
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.domain.is_empty() && !self.domain.starts_with('/') {
            validate_http_url(&self.domain, Self::FIELDS.domain, diag);
        }

        if let Some(twitter) = &self.author.twitter {
            validate_http_url(twitter, Self::FIELDS.author_twitter, diag);
        }

        sidebar::validate_sidebar(&self.sidebar, diag);
    }
}

/// URL format check using the url crate for strict validation.
fn validate_http_url(url_str: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            // Must have a valid host
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}
