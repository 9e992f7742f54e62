//! Site initialization command.

mod config;

use std::path::Path;

use anyhow::{Result, bail};

use crate::log;

use config::{CONFIG_FILE, STARTER_DOCUMENTS};

/// Create a new site skeleton at `name` (or the current directory).
pub fn new_site(name: Option<&Path>, dry: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };

    if root.join(CONFIG_FILE).exists() {
        bail!(
            "'{}' already exists in {}",
            CONFIG_FILE,
            root.display()
        );
    }

    if dry {
        log!("init"; "would create in {}:", root.display());
        eprintln!("- {CONFIG_FILE}");
        eprintln!("- .gitignore");
        eprintln!("- .ignore");
        for document in STARTER_DOCUMENTS {
            eprintln!("- {document}");
        }
        return Ok(());
    }

    std::fs::create_dir_all(&root)?;
    config::write_config(&root)?;
    config::write_ignore_files(&root, Path::new("dist"))?;
    config::write_starter_content(&root)?;

    log!("init"; "created new site at {}", root.display());
    log!("init"; "next: edit {CONFIG_FILE} and run 'guidepost check'");
    Ok(())
}
