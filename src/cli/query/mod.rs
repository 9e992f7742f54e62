//! Configuration query command.
//!
//! Emits the resolved configuration as JSON, or with `--routes` the flat
//! route table in sidebar order, each leaf carrying its enclosing group
//! title and the canonical URL from the seo plugin's builder.

mod output;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::config::section::sidebar;
use crate::seo::{PluginContext, SiteMeta};

/// One row of the `--routes` table.
#[derive(Debug, Serialize)]
struct RouteEntry<'a> {
    route: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

/// Query the resolved configuration
pub fn run_query(config: &SiteConfig, args: &QueryArgs) -> Result<()> {
    let value = if args.routes {
        route_table(config)?
    } else {
        serde_json::to_value(config)?
    };

    output::write_output(&value, args)
}

/// Build the flat route table in sidebar order.
fn route_table(config: &SiteConfig) -> Result<JsonValue> {
    let builder = config.seo_builder();
    let site = SiteMeta::from_config(config);
    let ctx = PluginContext { plugin: "seo" };

    let entries: Vec<RouteEntry<'_>> = sidebar::leaves_with_group(&config.theme.sidebar)
        .into_iter()
        .map(|(route, group)| RouteEntry {
            route,
            group,
            url: builder.map(|b| b.build(&ctx, &site, route)),
        })
        .collect();

    Ok(serde_json::to_value(entries)?)
}
