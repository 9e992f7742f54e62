//! Guidepost - configuration loader and checker for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Init scaffolds a fresh config, everything else loads one
    if let Commands::Init { name, dry } = &cli.command {
        return cli::init::new_site(name.as_deref(), *dry);
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Check { args } => cli::check::check_site(&config, args),
        Commands::Query { args } => cli::query::run_query(&config, args),
        Commands::Init { .. } => unreachable!("handled above"),
    }
}
