//! Configuration file generation.
//!
//! Creates guidepost.toml, ignore files, and starter content for new
//! sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "guidepost.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Starter content documents, relative to the site root.
/// Every route in the template sidebar must resolve to one of these so
/// `check` passes on a fresh site.
pub const STARTER_DOCUMENTS: &[&str] = &["docs/README.md", "docs/guide/getting-started/README.md"];

/// Generate guidepost.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# Guidepost configuration file (v{version})
# https://github.com/guidepost-rs/guidepost

[site]
# URL path prefix under which the site is served
base = "/"
# Display name of the site
title = "My Documentation"
# Theme the external generator renders with
theme = "default"

[plugins]
"code-copy" = true
"back-to-top" = true
# Canonical URLs: domain + route path
seo = {{ url = "domain-path" }}

[theme]
# Canonical site origin used to build absolute URLs
domain = ""
display_all_headers = false
last_updated = "Last Updated"
# Routes and groups, in display order
sidebar = [
    "/",
    {{ title = "Guide", collapsable = false, children = ["/guide/getting-started/"] }},
]

[theme.author]
name = ""
"#,
        version = env!("CARGO_PKG_VERSION")
    )
}

/// Write default guidepost.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Output directory (e.g., `/dist/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

/// Write starter content so every template sidebar route resolves
pub fn write_starter_content(root: &Path) -> Result<()> {
    for rel in STARTER_DOCUMENTS {
        let path = root.join(rel);
        // Only create if doesn't exist
        if path.exists() {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        let title = if rel.ends_with("getting-started/README.md") {
            "# Getting Started\n"
        } else {
            "# My Documentation\n"
        };
        fs::write(&path, title).with_context(|| format!("Failed to write '{}'", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::utils::route::document_candidates;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join("guidepost.toml");
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[theme.author]"));
    }

    #[test]
    fn test_template_parses_and_validates() {
        let config = SiteConfig::from_str(&generate_config_template()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.site.title, "My Documentation");
        assert_eq!(config.routes(), vec!["/", "/guide/getting-started/"]);
    }

    #[test]
    fn test_starter_content_covers_template_routes() {
        let config = SiteConfig::from_str(&generate_config_template()).unwrap();
        for route in config.routes() {
            let covered = document_candidates(route).iter().any(|candidate| {
                STARTER_DOCUMENTS
                    .iter()
                    .any(|doc| Path::new(doc) == Path::new("docs").join(candidate))
            });
            assert!(covered, "template route {route} has no starter document");
        }
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path(), Path::new("dist")).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains("/dist"));
        assert!(content.contains(".DS_Store"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path(), Path::new("dist")).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }

    #[test]
    fn test_starter_content_written_once() {
        let temp = TempDir::new().unwrap();
        let readme = temp.path().join("docs/README.md");
        fs::create_dir_all(readme.parent().unwrap()).unwrap();
        fs::write(&readme, "existing").unwrap();

        write_starter_content(temp.path()).unwrap();

        assert_eq!(fs::read_to_string(&readme).unwrap(), "existing");
        assert!(
            temp.path()
                .join("docs/guide/getting-started/README.md")
                .exists()
        );
    }
}
