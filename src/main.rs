//! docpage - documentation page renderer.
//!
//! Resolves slugs against a markdown content directory and renders each page
//! with its table of contents, edit link and, on category index pages, the
//! list of sibling pages.

mod cli;
mod config;
mod core;
mod embed;
mod logger;
mod page;
mod render;
mod source;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Serve { .. } => cli::serve::serve_site(&config),
        Commands::Render { slug } => cli::page::render(&config, slug),
        Commands::Meta { slug, pretty } => cli::page::meta(&config, slug, *pretty),
        Commands::Params { pretty } => cli::page::params(&config, *pretty),
    }
}
