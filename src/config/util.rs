//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/beginner/   ← cwd
/// /home/user/site/guidepost.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path or exists in cwd
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_found_directly() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = temp.path().join("guidepost.toml");
        std::fs::write(&config, "[site]\ntitle = \"t\"\n").unwrap();

        assert_eq!(find_config_file(&config), Some(config));
    }

    #[test]
    fn test_missing_absolute_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = temp.path().join("missing.toml");
        assert_eq!(find_config_file(&config), None);
    }
}
