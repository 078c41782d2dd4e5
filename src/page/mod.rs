//! Page types: slug, file location, kind, metadata and rendered data.
//!
//! A [`Page`] is a read-only projection produced by a content source for
//! one request or one build. Nothing mutates it after construction.

mod kind;
mod meta;
mod slug;
mod toc;

pub use kind::PageKind;
pub use meta::PageMeta;
pub use slug::Slug;
pub use toc::TocItem;

use serde::Serialize;

use crate::core::UrlPath;

/// Source file location of a page, relative to the content directory.
///
/// ```text
/// guide/install.md
///
/// PageFile {
///     path:    guide/install.md
///     dirname: guide
///     name:    install
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFile {
    /// Content-relative path with `/` separators (used by the edit link).
    pub path: String,
    /// Grouping directory, empty for files at the content root.
    pub dirname: String,
    /// File stem.
    pub name: String,
}

impl PageFile {
    /// Split a content-relative path into directory and stem.
    pub fn from_relative(path: &str) -> Self {
        let path = path.replace('\\', "/").trim_start_matches('/').to_string();
        let (dirname, file_name) = match path.rsplit_once('/') {
            Some((dir, file)) => (dir.to_string(), file),
            None => (String::new(), path.as_str()),
        };
        let name = match file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file_name,
        }
        .to_string();

        Self {
            path,
            dirname,
            name,
        }
    }

    /// Slug derived from the location: directory components plus the stem,
    /// with a trailing `index` dropped.
    ///
    /// `guide/install.md` -> `["guide", "install"]`, `guide/index.md` -> `["guide"]`
    pub fn slug(&self) -> Slug {
        let mut segments: Vec<String> = self
            .dirname
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if PageKind::from_name(&self.name).is_leaf() {
            segments.push(self.name.clone());
        }
        Slug::new(segments)
    }
}

/// Display data of a page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageData {
    pub title: String,
    pub description: Option<String>,
    /// Full-width layout (no TOC column).
    pub full: bool,
    /// Rendered body HTML. Opaque to the renderer.
    #[serde(skip)]
    pub body: String,
    pub toc: Vec<TocItem>,
    pub last_modified: Option<String>,
}

/// A resolved content entry.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub slugs: Slug,
    pub url: UrlPath,
    pub file: PageFile,
    pub kind: PageKind,
    pub data: PageData,
}

impl Page {
    /// Build a page from its file location. Slug, url and kind are derived
    /// here once; nothing downstream looks at the file name again.
    pub fn new(base: &str, file: PageFile, data: PageData) -> Self {
        let slugs = file.slug();
        let url = UrlPath::from_segments(base, slugs.as_slice());
        let kind = PageKind::from_name(&file.name);
        Self {
            slugs,
            url,
            file,
            kind,
            data,
        }
    }

    /// Index page of a non-root directory, i.e. a page that lists its siblings.
    #[inline]
    pub fn is_category(&self) -> bool {
        self.kind.is_index() && !self.slugs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(title: &str) -> PageData {
        PageData {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_page_file_nested() {
        let file = PageFile::from_relative("guide/install.md");
        assert_eq!(file.path, "guide/install.md");
        assert_eq!(file.dirname, "guide");
        assert_eq!(file.name, "install");
    }

    #[test]
    fn test_page_file_root() {
        let file = PageFile::from_relative("index.md");
        assert_eq!(file.dirname, "");
        assert_eq!(file.name, "index");
        assert!(file.slug().is_empty());
    }

    #[test]
    fn test_page_file_windows_separators() {
        let file = PageFile::from_relative("guide\\deep\\a.md");
        assert_eq!(file.path, "guide/deep/a.md");
        assert_eq!(file.dirname, "guide/deep");
    }

    #[test]
    fn test_slug_drops_index() {
        assert_eq!(
            PageFile::from_relative("guide/index.md").slug().as_slice(),
            ["guide"]
        );
        assert_eq!(
            PageFile::from_relative("guide/deep/config.md").slug().as_slice(),
            ["guide", "deep", "config"]
        );
    }

    #[test]
    fn test_page_new_derives_url_and_kind() {
        let page = Page::new("/docs", PageFile::from_relative("guide/index.md"), data("Guide"));
        assert_eq!(page.url.as_str(), "/docs/guide/");
        assert_eq!(page.kind, PageKind::Index);
        assert!(page.is_category());

        let root = Page::new("/docs", PageFile::from_relative("index.md"), data("Home"));
        assert_eq!(root.url.as_str(), "/docs/");
        assert!(root.kind.is_index());
        assert!(!root.is_category());

        let leaf = Page::new("/docs", PageFile::from_relative("guide/install.md"), data("Install"));
        assert!(!leaf.is_category());
    }
}
