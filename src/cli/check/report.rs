//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// Group label for leaves declared outside any sidebar group.
pub const TOP_LEVEL: &str = "(top level)";

/// A single missing-content error
#[derive(Debug, Clone)]
pub struct CheckError {
    /// The route that failed to resolve.
    pub route: String,
    /// Error reason/message.
    pub reason: String,
}

/// Missing-content report, grouped by sidebar group title
#[derive(Debug, Default)]
pub struct CheckReport {
    pub missing: BTreeMap<String, Vec<CheckError>>,
}

impl CheckReport {
    /// Add a missing-content error under a sidebar group.
    pub fn add_missing(&mut self, group: &str, route: String, reason: String) {
        self.missing
            .entry(group.to_string())
            .or_default()
            .push(CheckError { route, reason });
    }

    /// Count of sidebar groups with missing documents.
    pub fn group_count(&self) -> usize {
        self.missing.len()
    }

    /// Total missing-document count.
    pub fn missing_count(&self) -> usize {
        self.missing.values().map(|v| v.len()).sum()
    }

    /// Print the full report to stderr.
    pub fn print(&self) {
        if self.missing.is_empty() {
            return;
        }
        eprintln!();

        let group_count = self.group_count();
        let missing_count = self.missing_count();

        // Section header
        eprintln!(
            "{} {}",
            "missing content".red().bold(),
            format!(
                "({group_count} group{}, {missing_count} route{})",
                plural_s(group_count),
                plural_s(missing_count)
            )
            .dimmed()
        );

        for (group, errs) in &self.missing {
            // Group title
            eprintln!("{}{}{}", "[".dimmed(), group.cyan(), "]".dimmed());
            for e in errs {
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.route);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.route, e.reason);
                }
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.missing_count();

        if total == 0 {
            write!(f, "{}", "all routes resolve".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("missing route{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = CheckReport::default();
        report.add_missing(TOP_LEVEL, "/".into(), "not found".into());
        report.add_missing("초보자", "/beginner/a/".into(), "not found".into());
        report.add_missing("초보자", "/beginner/b/".into(), "not found".into());

        assert_eq!(report.group_count(), 2);
        assert_eq!(report.missing_count(), 3);
    }

    #[test]
    fn test_report_display() {
        owo_colors::set_override(false);

        let empty = CheckReport::default();
        assert_eq!(format!("{empty}"), "all routes resolve");

        let mut report = CheckReport::default();
        report.add_missing(TOP_LEVEL, "/".into(), String::new());
        assert!(format!("{report}").contains("1 missing route"));
    }
}
