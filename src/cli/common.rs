//! Common utilities shared across CLI commands.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::debug;
use crate::source::{MemorySource, fs::scan_content};
use crate::utils::plural_count;

/// Scan the configured content directory.
pub fn load_source(config: &SiteConfig) -> Result<MemorySource> {
    let content = &config.build.content;
    let source = scan_content(content, &config.build.base)
        .with_context(|| format!("Failed to load content from {}", content.display()))?;
    debug!("scan"; "{} in {}", plural_count(source.len(), "page"), content.display());
    Ok(source)
}

/// Write `value` as JSON to stdout, followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut out = io::stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}
