//! SEO URL building.
//!
//! Provides pure data structures for canonical URL generation. The seo
//! plugin's URL callback from the original configuration surface is a
//! named builder slot with the fixed signature
//! `(&PluginContext, &SiteMeta, path) -> String`.

use crate::config::SiteConfig;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters that must be escaped in a route path.
/// `/` stays literal so route structure survives encoding.
const ROUTE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?');

/// Site-level metadata handed to URL builders.
pub struct SiteMeta<'a> {
    pub title: &'a str,
    pub base: &'a str,
    /// Canonical origin; empty when the config leaves it unset.
    pub domain: &'a str,
}

impl<'a> SiteMeta<'a> {
    /// Lift site metadata from the loaded config.
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            title: &config.site.title,
            base: &config.site.base,
            domain: &config.theme.domain,
        }
    }
}

/// Invocation context handed to URL builders.
pub struct PluginContext<'a> {
    /// Name of the plugin the builder runs for.
    pub plugin: &'a str,
}

/// Named URL builder slot for the seo plugin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlBuilder {
    /// `domain + path`, the empty string standing in for an unset domain.
    #[default]
    DomainPath,
}

impl UrlBuilder {
    /// Resolve a builder by its config name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "domain-path" => Some(Self::DomainPath),
            _ => None,
        }
    }

    /// Config name of this builder.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DomainPath => "domain-path",
        }
    }

    /// All recognized builder names, for diagnostics.
    pub fn known_names() -> Vec<&'static str> {
        vec![Self::DomainPath.name()]
    }

    /// Build the absolute URL for a route path.
    pub fn build(&self, _ctx: &PluginContext, site: &SiteMeta, path: &str) -> String {
        match self {
            Self::DomainPath => format!("{}{}", site.domain, encode_route(path)),
        }
    }
}

/// Percent-encode a route path, keeping `/` literal.
///
/// Routes may contain spaces and non-ASCII segments
/// (e.g. `/news/0.18 and hdr/`), which must not leak into URLs raw.
pub fn encode_route(path: &str) -> String {
    utf8_percent_encode(path, ROUTE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site<'a>(domain: &'a str) -> SiteMeta<'a> {
        SiteMeta {
            title: "WGPU 학습하기",
            base: "/learn-wgpu-ko/",
            domain,
        }
    }

    #[test]
    fn test_domain_path_builder() {
        let ctx = PluginContext { plugin: "seo" };
        let url = UrlBuilder::DomainPath.build(&ctx, &site("/learn-wgpu-ko"), "/beginner/tutorial1-window/");
        assert_eq!(url, "/learn-wgpu-ko/beginner/tutorial1-window/");
    }

    #[test]
    fn test_unset_domain_yields_bare_path() {
        let ctx = PluginContext { plugin: "seo" };
        let url = UrlBuilder::DomainPath.build(&ctx, &site(""), "/showcase/pong/");
        assert_eq!(url, "/showcase/pong/");
    }

    #[test]
    fn test_route_with_spaces_is_encoded() {
        let ctx = PluginContext { plugin: "seo" };
        let url = UrlBuilder::DomainPath.build(&ctx, &site("/learn-wgpu-ko"), "/news/0.18 and hdr/");
        assert_eq!(url, "/learn-wgpu-ko/news/0.18%20and%20hdr/");
    }

    #[test]
    fn test_parse_round_trips_name() {
        assert_eq!(UrlBuilder::parse("domain-path"), Some(UrlBuilder::DomainPath));
        assert_eq!(UrlBuilder::parse("canonical"), None);
        assert_eq!(UrlBuilder::DomainPath.name(), "domain-path");
    }
}
