//! Single-page commands: `render`, `meta`, `params`.
//!
//! Payloads go to stdout; logs stay on stderr. A missing page surfaces as
//! [`RenderError::PageNotFound`](crate::render::RenderError), which ends the
//! process with a non-zero status.

use std::io::{self, Write};

use anyhow::Result;

use super::args::SlugArgs;
use super::common::{load_source, print_json};
use crate::config::SiteConfig;
use crate::render::{
    RenderOptions, generate_metadata, generate_static_params, render_html, render_page,
};

/// Print the HTML of the page at `slug`.
pub fn render(config: &SiteConfig, slug: &SlugArgs) -> Result<()> {
    let source = load_source(config)?;
    let opts = RenderOptions::from_config(config);
    let segments = slug.segments();

    let doc = render_page(&source, Some(segments.as_slice()), &opts)?;
    let html = render_html(&doc, &opts);

    let mut out = io::stdout().lock();
    out.write_all(html.as_bytes())?;
    Ok(())
}

/// Print the metadata of the page at `slug`.
pub fn meta(config: &SiteConfig, slug: &SlugArgs, pretty: bool) -> Result<()> {
    let source = load_source(config)?;
    let segments = slug.segments();

    let metadata = generate_metadata(&source, Some(segments.as_slice()))?;
    print_json(&metadata, pretty)
}

/// Print one static param per page.
pub fn params(config: &SiteConfig, pretty: bool) -> Result<()> {
    let source = load_source(config)?;
    print_json(&generate_static_params(&source), pretty)
}
