//! Content sources: where pages come from.
//!
//! The renderer only depends on [`PageSource`], a two-capability contract
//! (lookup by slug, list all). Implementations:
//!
//! - [`MemorySource`] - an in-memory page set (tests, fakes, scanned output)
//! - [`fs::scan_content`] - markdown directory loader producing a `MemorySource`

pub mod fs;
pub mod markdown;
mod memory;

pub use memory::MemorySource;

use std::path::PathBuf;

use thiserror::Error;

use crate::core::UrlPath;
use crate::page::{Page, Slug};

/// Page lookup contract consumed by the renderer.
///
/// `Sync` so a single source can be shared by parallel build workers.
pub trait PageSource: Sync {
    /// Look up a page by slug. `None` or an empty slug addresses the root page.
    fn get_page(&self, slug: Option<&[String]>) -> Option<&Page> {
        let slug = Slug::from_optional(slug);
        self.get_pages().iter().find(|page| page.slugs == slug)
    }

    /// All known pages, in listing order.
    fn get_pages(&self) -> &[Page];
}

/// Errors raised while building a page set.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid frontmatter in `{0}`: {1}")]
    Frontmatter(PathBuf, String),

    #[error("`{second}` and `{first}` both resolve to `{url}`")]
    DuplicateUrl {
        url: UrlPath,
        first: String,
        second: String,
    },
}
