//! Content root scanning for the check command.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use crate::utils::route::document_candidates;

/// Resolve a route to its content document under the content root.
///
/// Returns the first existing candidate, relative to the content root.
pub fn resolve_document(content_root: &Path, route: &str) -> Option<PathBuf> {
    document_candidates(route)
        .into_iter()
        .find(|candidate| content_root.join(candidate).is_file())
}

/// Human-readable list of the candidate paths a route was searched at.
pub fn searched_candidates(route: &str) -> String {
    let candidates: Vec<String> = document_candidates(route)
        .iter()
        .map(|c| format!("`{}`", c.display()))
        .collect();
    format!("(searched {})", candidates.join(", "))
}

/// Collect all markdown documents under the content root.
///
/// Paths are relative to the content root and sorted for stable output.
/// Hidden files and directories are skipped.
pub fn collect_documents(content_root: &Path) -> Vec<PathBuf> {
    if !content_root.is_dir() {
        return Vec::new();
    }

    let mut documents: Vec<PathBuf> = WalkDir::new(content_root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .filter_map(|path| path.strip_prefix(content_root).ok().map(Path::to_path_buf))
        .collect();

    documents.sort();
    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# page\n").unwrap();
    }

    #[test]
    fn test_resolve_readme_and_index() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "README.md");
        write(temp.path(), "beginner/tutorial1-window/index.md");

        assert_eq!(
            resolve_document(temp.path(), "/"),
            Some(PathBuf::from("README.md"))
        );
        assert_eq!(
            resolve_document(temp.path(), "/beginner/tutorial1-window/"),
            Some(PathBuf::from("beginner/tutorial1-window/index.md"))
        );
        assert_eq!(resolve_document(temp.path(), "/missing/"), None);
    }

    #[test]
    fn test_resolve_page_route() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "about.md");

        assert_eq!(
            resolve_document(temp.path(), "/about"),
            Some(PathBuf::from("about.md"))
        );
    }

    #[test]
    fn test_collect_documents_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "z/README.md");
        write(temp.path(), "a/README.md");
        fs::write(temp.path().join("style.css"), "body {}\n").unwrap();

        let documents = collect_documents(temp.path());
        assert_eq!(
            documents,
            vec![PathBuf::from("a/README.md"), PathBuf::from("z/README.md")]
        );
    }

    #[test]
    fn test_collect_documents_missing_root() {
        let temp = TempDir::new().unwrap();
        let documents = collect_documents(&temp.path().join("docs"));
        assert!(documents.is_empty());
    }
}
