//! Slug: ordered path segments identifying a page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered path segments. Empty only for the root page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(Vec<String>);

impl Slug {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Build from borrowed segments, dropping empty ones.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        Self(
            segments
                .iter()
                .map(AsRef::as_ref)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Build from an optional slug, as handed over by a router.
    /// `None` and `Some([])` both address the root page.
    pub fn from_optional(segments: Option<&[String]>) -> Self {
        segments.map(Self::from_segments).unwrap_or_default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}
