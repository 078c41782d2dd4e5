//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Documentation page renderer
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: docpage.toml)
    #[arg(short = 'C', long, global = true, default_value = "docpage.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every page into the output directory
    #[command(visible_alias = "b")]
    Build {
        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,
    },

    /// Start development server
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the HTML of one page
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        slug: SlugArgs,
    },

    /// Print the metadata of one page as JSON
    #[command(visible_alias = "m")]
    Meta {
        #[command(flatten)]
        slug: SlugArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print every page's static path as JSON
    #[command(visible_alias = "p")]
    Params {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Page address for single-page commands.
#[derive(clap::Args, Debug, Clone)]
pub struct SlugArgs {
    /// Slug segments, separated by spaces or `/` (omit for the root page).
    ///
    /// `guide install` and `guide/install` address the same page.
    #[arg(value_name = "SLUG")]
    pub segments: Vec<String>,
}

impl SlugArgs {
    /// Segments with `/` separators expanded and empty parts dropped.
    pub fn segments(&self) -> Vec<String> {
        self.segments
            .iter()
            .flat_map(|s| s.split('/'))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
