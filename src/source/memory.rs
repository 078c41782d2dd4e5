//! In-memory page set.

use rustc_hash::FxHashMap;

use super::{PageSource, SourceError};
use crate::core::UrlPath;
use crate::page::{Page, Slug};

/// Immutable page set with a slug index.
///
/// Listing order is the order pages were handed in; nothing re-sorts them.
#[derive(Debug, Default)]
pub struct MemorySource {
    pages: Vec<Page>,
    by_slug: FxHashMap<Slug, usize>,
}

impl MemorySource {
    /// Build a page set, rejecting two pages with the same url.
    pub fn new(pages: Vec<Page>) -> Result<Self, SourceError> {
        let mut by_url: FxHashMap<UrlPath, usize> = FxHashMap::default();
        let mut by_slug = FxHashMap::default();

        for (idx, page) in pages.iter().enumerate() {
            if let Some(&first) = by_url.get(&page.url) {
                return Err(SourceError::DuplicateUrl {
                    url: page.url.clone(),
                    first: pages[first].file.path.clone(),
                    second: page.file.path.clone(),
                });
            }
            by_url.insert(page.url.clone(), idx);
            by_slug.insert(page.slugs.clone(), idx);
        }

        Ok(Self { pages, by_slug })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageSource for MemorySource {
    fn get_page(&self, slug: Option<&[String]>) -> Option<&Page> {
        let slug = Slug::from_optional(slug);
        self.by_slug.get(&slug).map(|&idx| &self.pages[idx])
    }

    fn get_pages(&self) -> &[Page] {
        &self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageData, PageFile};

    fn page(path: &str) -> Page {
        Page::new(
            "/docs",
            PageFile::from_relative(path),
            PageData {
                title: path.to_string(),
                ..Default::default()
            },
        )
    }

    fn slug(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lookup_by_slug() {
        let source =
            MemorySource::new(vec![page("index.md"), page("guide/install.md")]).unwrap();

        let found = source.get_page(Some(slug(&["guide", "install"]).as_slice())).unwrap();
        assert_eq!(found.file.path, "guide/install.md");
        assert!(source.get_page(Some(slug(&["guide"]).as_slice())).is_none());
    }

    #[test]
    fn test_absent_slug_is_root() {
        let source = MemorySource::new(vec![page("index.md")]).unwrap();
        assert_eq!(source.get_page(None).unwrap().file.path, "index.md");
        assert_eq!(source.get_page(Some(&[][..])).unwrap().file.path, "index.md");
    }

    #[test]
    fn test_listing_order_preserved() {
        let source = MemorySource::new(vec![
            page("guide/zeta.md"),
            page("guide/alpha.md"),
            page("guide/index.md"),
        ])
        .unwrap();
        let paths: Vec<_> = source.get_pages().iter().map(|p| p.file.path.as_str()).collect();
        assert_eq!(paths, ["guide/zeta.md", "guide/alpha.md", "guide/index.md"]);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_duplicate_url_rejected() {
        // `guide.md` and `guide/index.md` both map to /docs/guide/
        let err = MemorySource::new(vec![page("guide/index.md"), page("guide.md")]).unwrap_err();
        assert!(matches!(err, SourceError::DuplicateUrl { .. }));
        assert!(err.to_string().contains("/docs/guide/"));
    }

    #[test]
    fn test_default_lookup_matches_indexed_lookup() {
        struct Listing(Vec<Page>);
        impl PageSource for Listing {
            fn get_pages(&self) -> &[Page] {
                &self.0
            }
        }

        let listing = Listing(vec![page("index.md"), page("a/b.md")]);
        assert_eq!(
            listing.get_page(Some(slug(&["a", "b"]).as_slice())).unwrap().file.path,
            "a/b.md"
        );
        assert!(listing.get_page(Some(slug(&["missing"]).as_slice())).is_none());
        assert_eq!(listing.get_page(None).unwrap().file.path, "index.md");
    }
}
