//! `[plugins]` section configuration.
//!
//! Maps plugin names to either a bare enable toggle or an options table:
//!
//! ```toml
//! [plugins]
//! code-copy = true
//! back-to-top = true
//! seo = { url = "domain-path" }
//! ```
//!
//! Plugin names are checked against the known registry at load time, so
//! a typo fails before the external generator ever runs.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::seo::UrlBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plugins the external generator ships with.
pub const KNOWN_PLUGINS: &[&str] = &["code-copy", "back-to-top", "seo"];

const PLUGINS: FieldPath = FieldPath::new("plugins");

/// Plugin-name → entry map, sorted so diagnostics are deterministic.
pub type PluginMap = BTreeMap<String, PluginEntry>;

/// Configuration of a single plugin: a toggle or an options table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginEntry {
    /// Plain enable/disable flag.
    Toggle(bool),

    /// Plugin options (currently only the seo plugin takes any).
    Options(PluginOptions),
}

/// Options table for plugins that accept configuration.
///
/// The seo plugin's URL callback is modeled as a named builder slot
/// rather than an arbitrary value, keeping the configuration closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginOptions {
    /// Name of the URL builder used for absolute page URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PluginEntry {
    /// Whether the plugin is active.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Toggle(enabled) => *enabled,
            Self::Options(_) => true,
        }
    }
}

/// Validate the plugin map against the known registry.
///
/// # Checks
/// - every plugin name is in [`KNOWN_PLUGINS`]
/// - options are only given to plugins that take them
/// - the seo `url` slot names a known builder
pub fn validate_plugins(plugins: &PluginMap, diag: &mut ConfigDiagnostics) {
    for (name, entry) in plugins {
        if !KNOWN_PLUGINS.contains(&name.as_str()) {
            diag.error_with_hint(
                PLUGINS,
                format!("unknown plugin '{name}'"),
                format!("known plugins: {}", KNOWN_PLUGINS.join(", ")),
            );
            continue;
        }

        match (name.as_str(), entry) {
            ("seo", PluginEntry::Options(options)) => {
                if let Some(url) = &options.url
                    && UrlBuilder::parse(url).is_none()
                {
                    diag.error_with_hint(
                        PLUGINS,
                        format!("unknown url builder '{url}' for plugin 'seo'"),
                        format!("known builders: {}", UrlBuilder::known_names().join(", ")),
                    );
                }
            }
            (_, PluginEntry::Options(_)) => {
                diag.error_with_hint(
                    PLUGINS,
                    format!("plugin '{name}' takes no options"),
                    format!("use `{name} = true`"),
                );
            }
            (_, PluginEntry::Toggle(_)) => {}
        }
    }
}

/// Resolve the URL builder configured for the seo plugin, if enabled.
pub fn seo_builder(plugins: &PluginMap) -> Option<UrlBuilder> {
    match plugins.get("seo")? {
        PluginEntry::Toggle(true) => Some(UrlBuilder::default()),
        PluginEntry::Toggle(false) => None,
        PluginEntry::Options(options) => match &options.url {
            Some(name) => UrlBuilder::parse(name),
            None => Some(UrlBuilder::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        plugins: PluginMap,
    }

    fn parse(toml: &str) -> PluginMap {
        toml::from_str::<Wrapper>(toml).unwrap().plugins
    }

    fn validate(plugins: &PluginMap) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        validate_plugins(plugins, &mut diag);
        diag
    }

    #[test]
    fn test_toggle_and_options_entries() {
        let plugins = parse(
            "[plugins]\n\"code-copy\" = true\n\"back-to-top\" = true\nseo = { url = \"domain-path\" }\n",
        );

        assert_eq!(plugins["code-copy"], PluginEntry::Toggle(true));
        assert!(plugins["seo"].is_enabled());
        assert!(!validate(&plugins).has_errors());
    }

    #[test]
    fn test_unknown_plugin_flagged() {
        let plugins = parse("[plugins]\n\"code-cpy\" = true\n");
        let diag = validate(&plugins);
        assert_eq!(diag.len(), 1);
        owo_colors::set_override(false);
        assert!(format!("{}", diag.into_result().unwrap_err()).contains("code-cpy"));
    }

    #[test]
    fn test_unknown_url_builder_flagged() {
        let plugins = parse("[plugins]\nseo = { url = \"canonical\" }\n");
        assert!(validate(&plugins).has_errors());
    }

    #[test]
    fn test_options_for_toggle_plugin_flagged() {
        let plugins = parse("[plugins]\n\"code-copy\" = { url = \"domain-path\" }\n");
        assert!(validate(&plugins).has_errors());
    }

    #[test]
    fn test_unknown_option_key_is_rejected() {
        // Neither a bool nor a recognized options table
        let result = toml::from_str::<Wrapper>("[plugins]\nseo = { callback = \"f\" }\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_seo_builder_resolution() {
        let plugins = parse("[plugins]\nseo = { url = \"domain-path\" }\n");
        assert_eq!(seo_builder(&plugins), Some(UrlBuilder::DomainPath));

        let plugins = parse("[plugins]\nseo = true\n");
        assert_eq!(seo_builder(&plugins), Some(UrlBuilder::default()));

        let plugins = parse("[plugins]\nseo = false\n");
        assert_eq!(seo_builder(&plugins), None);

        let plugins = parse("[plugins]\n\"code-copy\" = true\n");
        assert_eq!(seo_builder(&plugins), None);
    }
}
