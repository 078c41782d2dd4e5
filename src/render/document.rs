//! Page document: everything the layout needs for one page.

use serde::Serialize;

use super::category::{Card, category_cards};
use super::{RenderError, RenderOptions};
use crate::core::UrlPath;
use crate::page::{Page, TocItem};
use crate::source::PageSource;

/// "Edit source" link of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditLink {
    pub href: String,
    pub label: String,
}

/// A resolved page, ready for the layout.
#[derive(Debug, Clone, Serialize)]
pub struct DocsPage<'a> {
    pub url: &'a UrlPath,
    pub title: &'a str,
    pub description: Option<&'a str>,
    #[serde(skip)]
    pub body: &'a str,
    pub toc: &'a [TocItem],
    /// TOC column and popover are shown.
    pub toc_enabled: bool,
    /// Full-width layout.
    pub full: bool,
    pub last_update: Option<&'a str>,
    /// Shown in the TOC footer and the TOC popover footer.
    pub edit: Option<EditLink>,
    /// Sibling cards, only on category index pages.
    pub cards: Option<Vec<Card>>,
}

impl<'a> DocsPage<'a> {
    /// Assemble the document of `page`. `pages` is the full listing, used
    /// for category cards.
    pub fn new(pages: &[Page], page: &'a Page, opts: &RenderOptions) -> Self {
        let data = &page.data;
        Self {
            url: &page.url,
            title: &data.title,
            description: data.description.as_deref(),
            body: &data.body,
            toc: &data.toc,
            toc_enabled: opts.toc && !data.toc.is_empty(),
            full: data.full,
            last_update: data.last_modified.as_deref(),
            edit: opts.edit.as_ref().map(|edit| edit.link(&page.file.path)),
            cards: category_cards(pages, page, &opts.fallback_description),
        }
    }
}

/// Resolve `slug` and assemble its document.
pub fn render_page<'a, S: PageSource + ?Sized>(
    source: &'a S,
    slug: Option<&[String]>,
    opts: &RenderOptions,
) -> Result<DocsPage<'a>, RenderError> {
    let page = source
        .get_page(slug)
        .ok_or_else(|| RenderError::not_found(slug))?;
    Ok(DocsPage::new(source.get_pages(), page, opts))
}
