//! Configuration check command.
//!
//! The loader has already validated the configuration's shape by the
//! time this runs; `check` enforces the route→document contract: every
//! sidebar leaf must resolve to a content document under the content
//! root. Documents no route reaches are reported as hints.

mod report;
mod scan;

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;

use crate::cli::CheckArgs;
use crate::config::SiteConfig;
use crate::config::section::sidebar;
use crate::log;
use crate::utils::{plural_count, plural_s};

use report::{CheckReport, TOP_LEVEL};

/// Check sidebar routes against the content root
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    crate::logger::set_verbose(args.verbose);

    let routes = sidebar::leaves_with_group(&config.theme.sidebar);
    if routes.is_empty() {
        log!("check"; "no sidebar routes declared");
        return Ok(());
    }

    log!(
        "check";
        "checking {} against `{}`",
        plural_count(routes.len(), "route"),
        config.root_relative(&config.content_root).display()
    );

    // Resolve every route, remembering which documents are claimed
    let mut claimed: BTreeSet<PathBuf> = BTreeSet::new();
    let mut report = CheckReport::default();

    for (route, group) in routes {
        match scan::resolve_document(&config.content_root, route) {
            Some(document) => {
                crate::debug!("check"; "{} -> {}", route, document.display());
                claimed.insert(document);
            }
            None => {
                report.add_missing(
                    group.unwrap_or(TOP_LEVEL),
                    route.to_string(),
                    scan::searched_candidates(route),
                );
            }
        }
    }

    if !args.no_orphans {
        report_orphans(config, &claimed);
    }

    let missing = report.missing_count();
    if missing == 0 {
        log!("check"; "{report}");
        return Ok(());
    }

    report.print();
    eprintln!();

    if args.warn_only {
        log!("warning"; "{} missing (warn-only)", plural_count(missing, "document"));
        Ok(())
    } else {
        anyhow::bail!(
            "found {} with no content document{}",
            plural_count(missing, "route"),
            plural_s(missing)
        );
    }
}

/// Report content documents no sidebar route reaches.
fn report_orphans(config: &SiteConfig, claimed: &BTreeSet<PathBuf>) {
    let documents = scan::collect_documents(&config.content_root);
    let orphans: Vec<_> = documents
        .iter()
        .filter(|document| !claimed.contains(*document))
        .collect();

    if orphans.is_empty() {
        return;
    }

    log!(
        "check";
        "{} not reachable from the sidebar:",
        plural_count(orphans.len(), "document")
    );
    for orphan in orphans {
        eprintln!("- {}", orphan.display());
    }
}
