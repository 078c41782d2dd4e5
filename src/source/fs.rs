//! Markdown content directory loader.
//!
//! Walks the content directory, reads every `.md` / `.mdx` file, and
//! produces a [`MemorySource`]. Files are listed in a stable order: by
//! directory, the directory's `index` first, then by file name.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rayon::prelude::*;

use super::markdown::{self, MarkdownMetaExtractor};
use super::{MemorySource, SourceError};
use crate::debug;
use crate::page::{Page, PageData, PageFile, PageKind, PageMeta};
use crate::utils::date::DateTimeUtc;
use crate::utils::path::to_slash_relative;

const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Load every page under `content_dir`, addressing them under `base`.
///
/// Drafts are skipped. A missing content directory yields an empty set.
pub fn scan_content(content_dir: &Path, base: &str) -> Result<MemorySource, SourceError> {
    let files = collect_content_files(content_dir);

    let loaded: Vec<Option<Page>> = files
        .par_iter()
        .map(|(relative, path)| load_page(relative, path, base))
        .collect::<Result<_, _>>()?;

    let total = loaded.len();
    let pages: Vec<Page> = loaded.into_iter().flatten().collect();
    if pages.len() < total {
        debug!("scan"; "skipped {} draft(s)", total - pages.len());
    }

    MemorySource::new(pages)
}

/// Collect content files as `(content-relative path, absolute path)`, in listing order.
fn collect_content_files(content_dir: &Path) -> Vec<(String, PathBuf)> {
    if !content_dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<(String, PathBuf)> = WalkDir::new(content_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
        })
        .filter_map(|p| to_slash_relative(&p, content_dir).map(|rel| (rel, p)))
        .collect();

    files.sort_by_cached_key(|(relative, _)| listing_key(relative));
    files
}

/// Sort key: directory, index before other files, then file name.
fn listing_key(relative: &str) -> (String, bool, String) {
    let file = PageFile::from_relative(relative);
    (file.dirname, PageKind::from_name(&file.name).is_leaf(), file.path)
}

/// Read and render one file. `Ok(None)` for drafts.
fn load_page(
    relative: &str,
    path: &Path,
    base: &str,
) -> Result<Option<Page>, SourceError> {
    let source =
        std::fs::read_to_string(path).map_err(|err| SourceError::Io(path.to_path_buf(), err))?;

    let (meta, body) = match MarkdownMetaExtractor.extract_frontmatter(&source) {
        Ok(Some((meta, body))) => (meta, body),
        Ok(None) => (PageMeta::default(), source.as_str()),
        Err(msg) => return Err(SourceError::Frontmatter(path.to_path_buf(), msg)),
    };

    if meta.draft {
        return Ok(None);
    }

    let rendered = markdown::render(body, meta.title.is_none());
    let file = PageFile::from_relative(relative);

    let title = meta
        .title
        .or(rendered.title)
        .unwrap_or_else(|| file.name.clone());
    let last_modified = match meta.last_modified {
        Some(date) if DateTimeUtc::parse(&date).is_some() => Some(date),
        Some(date) => {
            debug!("scan"; "{relative}: unrecognized last-modified `{date}`, using mtime");
            file_mtime(path)
        }
        None => file_mtime(path),
    };

    let data = PageData {
        title,
        description: meta.description,
        full: meta.full,
        body: rendered.html,
        toc: rendered.toc,
        last_modified,
    };

    Ok(Some(Page::new(base, file, data)))
}

/// File modification date as `YYYY-MM-DD`.
fn file_mtime(path: &Path) -> Option<String> {
    let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
    DateTimeUtc::from_system_time(modified).map(DateTimeUtc::to_date_string)
}
