//! Page kind: category landing page or regular entry.

use serde::Serialize;

/// File stem that marks a directory's landing page.
pub const INDEX_NAME: &str = "index";

/// Page kind.
///
/// Decided once from the file stem when the page is built. Category
/// logic matches on this tag, never on the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Landing page of a directory (`index.md`).
    Index,
    /// Any other page.
    #[default]
    Leaf,
}

impl PageKind {
    /// Determine kind from a file stem.
    pub fn from_name(name: &str) -> Self {
        if name == INDEX_NAME {
            Self::Index
        } else {
            Self::Leaf
        }
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }
}
