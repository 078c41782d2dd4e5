//! Render error types.

use thiserror::Error;

use crate::page::Slug;

/// Errors raised by the page entry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// No page resolves for the requested slug.
    #[error("page not found: `{slug}`")]
    PageNotFound { slug: Slug },
}

impl RenderError {
    pub fn not_found(slug: Option<&[String]>) -> Self {
        Self::PageNotFound {
            slug: Slug::from_optional(slug),
        }
    }
}
