//! Category index cards.
//!
//! An index page with a non-empty slug lists the other pages of its
//! directory as cards. The root index never does.

use serde::Serialize;

use crate::core::UrlPath;
use crate::page::Page;

/// One sibling entry on a category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub url: UrlPath,
}

impl Card {
    /// Project a page into a card, substituting `fallback` for a missing description.
    pub fn from_page(page: &Page, fallback: &str) -> Self {
        Self {
            title: page.data.title.clone(),
            description: page
                .data
                .description
                .clone()
                .unwrap_or_else(|| fallback.to_string()),
            url: page.url.clone(),
        }
    }
}

/// Pages sharing `page`'s directory, index pages excluded, in listing order.
///
/// Does not check that `page` is a category; see [`category_cards`].
pub fn siblings<'a>(pages: &'a [Page], page: &Page) -> Vec<&'a Page> {
    pages
        .iter()
        .filter(|p| p.file.dirname == page.file.dirname && p.kind.is_leaf())
        .collect()
}

/// Cards for a category page, or `None` when `page` is not a category index.
///
/// An empty directory yields `Some(vec![])`.
pub fn category_cards(pages: &[Page], page: &Page, fallback: &str) -> Option<Vec<Card>> {
    if !page.is_category() {
        return None;
    }
    Some(
        siblings(pages, page)
            .into_iter()
            .map(|p| Card::from_page(p, fallback))
            .collect(),
    )
}
