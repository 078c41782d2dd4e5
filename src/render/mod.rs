//! Page rendering.
//!
//! Entry operations, all pure projections over a [`PageSource`]:
//!
//! | Operation                  | Output                         | Raises         |
//! |----------------------------|--------------------------------|----------------|
//! | [`render_page`]            | [`DocsPage`] (+ category cards) | `PageNotFound` |
//! | [`generate_metadata`]      | `Metadata`                     | `PageNotFound` |
//! | [`generate_static_params`] | one `StaticParam` per page     | -              |
//!
//! [`render_html`] turns a document into the final HTML page.
//!
//! [`PageSource`]: crate::source::PageSource

mod category;
mod document;
mod error;
mod html;
mod metadata;
mod params;

pub use category::Card;
pub use document::{DocsPage, EditLink, render_page};
pub use error::RenderError;
pub use html::{render_html, render_not_found};
pub use metadata::generate_metadata;
pub use params::generate_static_params;

use crate::config::SiteConfig;

/// Placeholder replaced by the page's content-relative file path.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Edit link template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTemplate {
    /// URL with a `{path}` placeholder.
    pub url: String,
    pub label: String,
}

impl EditTemplate {
    pub fn link(&self, file_path: &str) -> EditLink {
        EditLink {
            href: self.url.replace(PATH_PLACEHOLDER, file_path),
            label: self.label.clone(),
        }
    }
}

/// Presentation settings shared by every rendered page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub site_title: String,
    /// Absolute site URL with a trailing `/`, for canonical links.
    pub site_url: Option<url::Url>,
    /// URL prefix pages live under.
    pub base: String,
    /// `None` when edit links are disabled.
    pub edit: Option<EditTemplate>,
    /// Card description for pages without one.
    pub fallback_description: String,
    /// TOC shown at all (still hidden for pages without headings).
    pub toc: bool,
}

impl RenderOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        let docs = &config.docs;
        Self {
            site_title: config.site.title.clone(),
            site_url: config.site.url.as_deref().and_then(site_root),
            base: config.build.base.clone(),
            edit: docs.edit.enable.then(|| EditTemplate {
                url: docs.edit.url.clone(),
                label: docs.edit.label.clone(),
            }),
            fallback_description: docs.category.fallback_description.clone(),
            toc: docs.toc.enable,
        }
    }
}

/// Parse the site URL so that page paths join under it, not over it.
///
/// `https://org.github.io/project` -> `https://org.github.io/project/`
fn site_root(url: &str) -> Option<url::Url> {
    let mut url = url::Url::parse(url).ok()?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Some(url)
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Pages under `/docs`, titled by file stem, in the given order.
#[cfg(test)]
pub fn test_pages(entries: &[(&str, Option<&str>)]) -> Vec<crate::page::Page> {
    use crate::page::{Page, PageData, PageFile};

    entries
        .iter()
        .map(|(path, description)| {
            let file = PageFile::from_relative(path);
            let data = PageData {
                title: file.name.clone(),
                description: description.map(str::to_string),
                ..Default::default()
            };
            Page::new("/docs", file, data)
        })
        .collect()
}

/// In-memory source over [`test_pages`].
#[cfg(test)]
pub fn test_source(entries: &[(&str, Option<&str>)]) -> crate::source::MemorySource {
    crate::source::MemorySource::new(test_pages(entries)).unwrap()
}
