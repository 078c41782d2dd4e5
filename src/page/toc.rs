//! Table of contents entry.

use serde::Serialize;

/// A heading entry in a page's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    /// Heading text.
    pub title: String,
    /// Anchor link (`#heading-id`).
    pub url: String,
    /// Heading level (2-4).
    pub depth: u8,
}

impl TocItem {
    pub fn new(title: impl Into<String>, id: &str, depth: u8) -> Self {
        Self {
            title: title.into(),
            url: format!("#{id}"),
            depth,
        }
    }
}
