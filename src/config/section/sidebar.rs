//! Sidebar navigation tree.
//!
//! A sidebar entry is either a bare route string or a titled group of
//! entries:
//!
//! ```toml
//! [theme]
//! sidebar = [
//!     "/",
//!     { title = "초보자", collapsable = false, children = ["/beginner/tutorial1-window/"] },
//! ]
//! ```
//!
//! Entry order is display order. Entries are kept in a `Vec` and never
//! resorted.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Groups nested deeper than this are rejected as malformed.
const MAX_NESTING: usize = 16;

const SIDEBAR: FieldPath = FieldPath::new("theme.sidebar");

/// A single sidebar entry: a content route or a group of entries.
///
/// Serde resolves the variant from the TOML shape: strings become
/// `Leaf`, tables become `Group`, anything else fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Direct route to a content page, e.g. `/beginner/tutorial1-window/`.
    Leaf(String),

    /// Titled group of entries.
    Group(NavGroup),
}

/// A titled, optionally collapsable group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavGroup {
    /// Group heading shown in the sidebar.
    pub title: String,

    /// Whether the theme may render the group collapsed.
    #[serde(default)]
    pub collapsable: bool,

    /// Entries in display order. Nested groups are allowed.
    #[serde(default)]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    /// Route path if this entry is a leaf.
    #[inline]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(route) => Some(route),
            Self::Group(_) => None,
        }
    }
}

/// Collect all leaf routes in declaration order, descending into groups.
pub fn collect_leaves(entries: &[NavEntry]) -> Vec<&str> {
    let mut leaves = Vec::new();
    push_leaves(entries, &mut leaves);
    leaves
}

fn push_leaves<'a>(entries: &'a [NavEntry], out: &mut Vec<&'a str>) {
    for entry in entries {
        match entry {
            NavEntry::Leaf(route) => out.push(route),
            NavEntry::Group(group) => push_leaves(&group.children, out),
        }
    }
}

/// Leaf routes paired with the title of their innermost enclosing group.
/// Top-level leaves carry `None`.
pub fn leaves_with_group(entries: &[NavEntry]) -> Vec<(&str, Option<&str>)> {
    let mut out = Vec::new();
    push_leaves_with_group(entries, None, &mut out);
    out
}

fn push_leaves_with_group<'a>(
    entries: &'a [NavEntry],
    group: Option<&'a str>,
    out: &mut Vec<(&'a str, Option<&'a str>)>,
) {
    for entry in entries {
        match entry {
            NavEntry::Leaf(route) => out.push((route, group)),
            NavEntry::Group(g) => push_leaves_with_group(&g.children, Some(&g.title), out),
        }
    }
}

/// Validate the sidebar tree.
///
/// # Checks
/// - every leaf route is non-empty and starts with `/`
/// - no duplicate leaf routes anywhere in the tree
/// - group titles are non-empty
/// - nesting stays below `MAX_NESTING`
pub fn validate_sidebar(entries: &[NavEntry], diag: &mut ConfigDiagnostics) {
    let mut seen = BTreeSet::new();
    validate_entries(entries, 0, &mut seen, diag);
}

fn validate_entries<'a>(
    entries: &'a [NavEntry],
    depth: usize,
    seen: &mut BTreeSet<&'a str>,
    diag: &mut ConfigDiagnostics,
) {
    if depth > MAX_NESTING {
        diag.error(
            SIDEBAR,
            format!("groups nested deeper than {MAX_NESTING} levels"),
        );
        return;
    }

    for entry in entries {
        match entry {
            NavEntry::Leaf(route) => {
                if route.is_empty() {
                    diag.error(SIDEBAR, "empty route");
                    continue;
                }
                if !route.starts_with('/') {
                    diag.error_with_hint(
                        SIDEBAR,
                        format!("route '{route}' must start with `/`"),
                        format!("use \"/{route}\""),
                    );
                }
                if !seen.insert(route) {
                    diag.error(SIDEBAR, format!("duplicate route '{route}'"));
                }
            }
            NavEntry::Group(group) => {
                if group.title.is_empty() {
                    diag.error(SIDEBAR, "group with empty title");
                }
                validate_entries(&group.children, depth + 1, seen, diag);
            }
        }
    }
}
