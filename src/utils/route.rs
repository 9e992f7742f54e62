//! Route processing utilities.
//!
//! Provides consistent route handling across the codebase:
//! - Path normalization (leading slash handling)
//! - Link type detection (external vs internal)
//! - Route to content-document mapping

use std::path::PathBuf;

/// Strip leading slash from a route path
///
/// # Examples
///
/// - `strip_leading_slash("/beginner/post")` -> `"beginner/post"`
/// - `strip_leading_slash("beginner/post")` -> `"beginner/post"`
/// - `strip_leading_slash("/")` -> `""`
#[inline]
pub fn strip_leading_slash(route: &str) -> &str {
    route.trim_start_matches('/')
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Content documents a route may resolve to, relative to the content root.
///
/// Slash-terminated routes name a directory and accept `README.md` or
/// `index.md`; other routes name a single document:
///
/// - `/` -> `README.md`, `index.md`
/// - `/beginner/tutorial1-window/` -> `beginner/tutorial1-window/README.md`, `.../index.md`
/// - `/about` -> `about.md`
pub fn document_candidates(route: &str) -> Vec<PathBuf> {
    let rel = strip_leading_slash(route);

    if rel.is_empty() {
        return vec![PathBuf::from("README.md"), PathBuf::from("index.md")];
    }

    if route.ends_with('/') {
        let dir = PathBuf::from(rel);
        vec![dir.join("README.md"), dir.join("index.md")]
    } else {
        vec![PathBuf::from(format!("{rel}.md"))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_strip_leading_slash() {
        assert_eq!(strip_leading_slash("/beginner/post"), "beginner/post");
        assert_eq!(strip_leading_slash("beginner/post"), "beginner/post");
        assert_eq!(strip_leading_slash("/"), "");
        assert_eq!(strip_leading_slash(""), "");
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
    }

    #[test]
    fn test_document_candidates_root() {
        assert_eq!(
            document_candidates("/"),
            vec![Path::new("README.md"), Path::new("index.md")]
        );
    }

    #[test]
    fn test_document_candidates_directory_route() {
        assert_eq!(
            document_candidates("/beginner/tutorial1-window/"),
            vec![
                Path::new("beginner/tutorial1-window/README.md"),
                Path::new("beginner/tutorial1-window/index.md"),
            ]
        );
    }

    #[test]
    fn test_document_candidates_page_route() {
        assert_eq!(document_candidates("/about"), vec![Path::new("about.md")]);
    }

    #[test]
    fn test_document_candidates_route_with_spaces() {
        assert_eq!(
            document_candidates("/news/0.18 and hdr/"),
            vec![
                Path::new("news/0.18 and hdr/README.md"),
                Path::new("news/0.18 and hdr/index.md"),
            ]
        );
    }
}
