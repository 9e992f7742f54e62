//! Site configuration management for `guidepost.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── theme      # [theme] (incl. author)
//! │   ├── plugins    # [plugins]
//! │   └── sidebar    # Navigation entry tree
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[site]`    | Site identity (base, title, theme)           |
//! | `[theme]`   | Domain, author, display flags, sidebar       |
//! | `[plugins]` | Plugin toggles and options                   |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    NavEntry, NavGroup, PluginEntry, PluginMap, PluginOptions, SiteSection, ThemeSection,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::Cli;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default content root, relative to the project root.
const DEFAULT_CONTENT_DIR: &str = "docs";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing guidepost.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Content root the sidebar routes resolve into (internal use only)
    #[serde(skip)]
    pub content_root: PathBuf,

    /// Site identity. Required: a config without `site.title` is malformed.
    pub site: SiteSection,

    /// Theme settings (domain, author, sidebar)
    #[serde(default)]
    pub theme: ThemeSection,

    /// Plugin toggles and options
    #[serde(default)]
    pub plugins: PluginMap,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            content_root: PathBuf::new(),
            site: SiteSection::default(),
            theme: ThemeSection::default(),
            plugins: PluginMap::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is the config file's parent directory. The returned config has been
    /// fully validated.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(
                "config file '{}' not found. Run 'guidepost init' to create a new site.",
                cli.config.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;

        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Resolve root and content paths after parsing.
    fn finalize(&mut self, cli: &Cli) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let content = cli
            .content
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));
        self.content_root = if content.is_absolute() {
            content
        } else {
            self.root.join(content)
        };
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        // Unknown fields are typos until proven otherwise
        if !ignored.is_empty() {
            return Err(ConfigError::UnknownFields(ignored));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        section::plugins::validate_plugins(&self.plugins, &mut diag);

        diag.print_warnings();

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Leaf routes in sidebar order.
    pub fn routes(&self) -> Vec<&str> {
        section::sidebar::collect_leaves(&self.theme.sidebar)
    }

    /// URL builder configured via the seo plugin, if enabled.
    pub fn seo_builder(&self) -> Option<crate::seo::UrlBuilder> {
        section::plugins::seo_builder(&self.plugins)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
