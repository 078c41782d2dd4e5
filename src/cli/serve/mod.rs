//! Development server.
//!
//! Pages are rendered on request. The content directory is rescanned for
//! every request, so edits show up on reload and each request works on its
//! own immutable page set.

mod lifecycle;
mod response;

use std::sync::Arc;

use anyhow::Result;
use tiny_http::{Request, Server};

use super::common::load_source;
use crate::config::SiteConfig;
use crate::core::{UrlPath, is_shutdown};
use crate::render::{RenderError, RenderOptions, render_html, render_page};
use crate::source::PageSource;
use crate::{debug, log};

/// Bind the HTTP server and serve until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(&server);

    let opts = RenderOptions::from_config(config);
    let home = UrlPath::from_page(&opts.base);
    log!("serve"; "http://{}{}", addr, home.to_encoded());
    debug!("serve"; "content: {}", config.build.content.display());

    run_request_loop(&server, config, &opts);
    Ok(())
}

fn run_request_loop(server: &Server, config: &SiteConfig, opts: &RenderOptions) {
    rayon::scope(|scope| {
        for request in server.incoming_requests() {
            scope.spawn(move |_| {
                if let Err(e) = handle_request(request, config, opts) {
                    log!("serve"; "request error: {e}");
                }
            });
        }
    });
}

/// What a request URL resolves to.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// Rendered page HTML.
    Page(String),
    NotFound,
    /// Encoded redirect location.
    Redirect(String),
}

/// Route a decoded request URL. `load` runs only for URLs under the base.
fn route<S, F>(url: &UrlPath, opts: &RenderOptions, load: F) -> Result<Outcome>
where
    S: PageSource,
    F: FnOnce() -> Result<S>,
{
    let home = UrlPath::from_page(&opts.base);

    // `/` has no page when everything lives under a base
    if url.is_root() && !home.is_root() {
        return Ok(Outcome::Redirect(home.to_encoded()));
    }

    let Some(segments) = url.segments_under(&opts.base) else {
        return Ok(Outcome::NotFound);
    };

    let source = load()?;
    let outcome = match render_page(&source, Some(segments.as_slice()), opts) {
        Ok(doc) => Outcome::Page(render_html(&doc, opts)),
        Err(RenderError::PageNotFound { .. }) => Outcome::NotFound,
    };
    Ok(outcome)
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig, opts: &RenderOptions) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }
    if !response::is_readable_method(&request) {
        return response::respond_method_not_allowed(request);
    }

    let url = UrlPath::from_browser(request.url());

    match route(&url, opts, || load_source(config)) {
        Ok(Outcome::Page(html)) => {
            debug!("serve"; "{}", url);
            response::respond_page(request, html)
        }
        Ok(Outcome::NotFound) => {
            log!("404"; "{}", url);
            response::respond_not_found(request, url.as_str(), opts)
        }
        Ok(Outcome::Redirect(location)) => response::respond_redirect(request, &location),
        Err(e) => {
            log!("error"; "{e:#}");
            response::respond_error(request, &e)
        }
    }
}
