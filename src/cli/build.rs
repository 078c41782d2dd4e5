//! Static build: every page to `<output>/<url>/index.html`, plus `404.html`.
//!
//! Pages are enumerated with the static params, then resolved and rendered
//! in parallel against the shared page set.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::common::load_source;
use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::logger::ProgressLine;
use crate::render::{
    RenderOptions, generate_static_params, render_html, render_not_found, render_page,
};
use crate::{debug, log, utils::plural_count};

/// Build the whole site.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let start = Instant::now();
    let output = &config.build.output;

    prepare_output(output, config.build.clean)?;

    let source = load_source(config)?;
    let opts = RenderOptions::from_config(config);
    let params = generate_static_params(&source);

    if params.is_empty() {
        log!("warning"; "no pages in {}", config.build.content.display());
    }

    let progress = ProgressLine::new("build", &[("pages", params.len())]);

    params.par_iter().try_for_each(|param| -> Result<()> {
        let doc = render_page(&source, Some(param.slug.as_slice()), &opts)?;
        let path = output_file(output, doc.url);
        write_file(&path, render_html(&doc, &opts).as_bytes())?;
        progress.inc("pages");
        Ok(())
    })?;

    progress.finish();

    write_file(
        &output.join("404.html"),
        render_not_found(None, &opts).as_bytes(),
    )?;

    log!(
        "build";
        "{} in {:.2?}",
        plural_count(params.len(), "page"),
        start.elapsed()
    );
    Ok(())
}

/// Create the output directory, removing it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        debug!("build"; "cleaning {}", output.display());
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))
}

/// `/docs/guide/install/` -> `<output>/docs/guide/install/index.html`
fn output_file(output: &Path, url: &UrlPath) -> PathBuf {
    let mut path = output.to_path_buf();
    path.extend(url.segments());
    path.join("index.html")
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
