//! Markdown loading: frontmatter extraction and HTML rendering via `pulldown-cmark`.
//!
//! Rendering is plain CommonMark (+ tables, footnotes,
//! strikethrough, task lists, heading attributes). The only additions are
//! stable heading anchors and the table of contents built from them.

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use rustc_hash::FxHashMap;

use crate::page::{PageMeta, TocItem};

/// Heading levels collected into the table of contents.
const TOC_DEPTH: std::ops::RangeInclusive<u8> = 2..=4;

// =============================================================================
// Frontmatter
// =============================================================================

/// Markdown metadata extractor from YAML (`---`) or TOML (`+++`) frontmatter
pub struct MarkdownMetaExtractor;

impl MarkdownMetaExtractor {
    /// Extract frontmatter and return (metadata, body).
    ///
    /// Returns `Ok(None)` when the file has no frontmatter block.
    pub fn extract_frontmatter<'a>(
        &self,
        content: &'a str,
    ) -> Result<Option<(PageMeta, &'a str)>, String> {
        match Self::detect_frontmatter(content) {
            Some((fm, body, true)) => Ok(Some((Self::parse_toml(fm)?, body))),
            Some((fm, body, false)) => Ok(Some((Self::parse_yaml_like(fm), body))),
            None => Ok(None),
        }
    }

    /// Parse simple YAML-like frontmatter (key: value).
    fn parse_yaml_like(content: &str) -> PageMeta {
        let mut meta = PageMeta::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = unquote(value.trim());

            match key.trim().to_lowercase().as_str() {
                "title" => meta.title = Some(value.to_string()),
                "description" => meta.description = Some(value.to_string()),
                "full" => meta.full = value.eq_ignore_ascii_case("true"),
                "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                "last-modified" | "last_modified" | "lastmodified" => {
                    meta.last_modified = Some(value.to_string());
                }
                _ => {}
            }
        }

        meta
    }

    /// Parse TOML frontmatter.
    fn parse_toml(content: &str) -> Result<PageMeta, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }

    /// Detect and extract frontmatter.
    /// Returns `(frontmatter, body, is_toml)` if found.
    fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();

        for (fence, is_toml) in [("---", false), ("+++", true)] {
            if trimmed.starts_with(fence)
                && let Some(end) = trimmed[3..].find(&format!("\n{fence}"))
            {
                let fm = trimmed[3..3 + end].trim();
                let rest = &trimmed[3 + end + 4..];
                let body = rest.trim_start_matches(['\r', '\n']);
                return Some((fm, body, is_toml));
            }
        }

        None
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

// =============================================================================
// Rendering
// =============================================================================

/// Output of [`render`].
#[derive(Debug, Clone, Default)]
pub struct RenderedMarkdown {
    pub html: String,
    pub toc: Vec<TocItem>,
    /// Text of a leading `# Heading`, removed from `html` (only with `take_title`).
    pub title: Option<String>,
}

fn options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_FOOTNOTES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    opts
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Render a markdown body to HTML, assigning anchor ids to every heading.
///
/// With `take_title`, a leading `# Heading` is moved out of the body into
/// [`RenderedMarkdown::title`].
pub fn render(markdown: &str, take_title: bool) -> RenderedMarkdown {
    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, options()).collect();
    let mut anchors = AnchorSet::default();
    let mut toc = Vec::new();

    let mut i = 0;
    while i < events.len() {
        let Event::Start(Tag::Heading { level, id, .. }) = &events[i] else {
            i += 1;
            continue;
        };
        let depth = heading_depth(*level);
        let explicit = id.as_ref().map(|id| id.to_string());

        let end = events[i..]
            .iter()
            .position(|e| matches!(e, Event::End(TagEnd::Heading(_))))
            .map_or(events.len(), |offset| i + offset);
        let text = heading_text(&events[i + 1..end]);

        let id = match explicit {
            Some(id) => anchors.claim(id),
            None => anchors.claim(slugify_anchor(&text)),
        };

        if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[i] {
            *slot = Some(CowStr::from(id.clone()));
        }
        if TOC_DEPTH.contains(&depth) {
            toc.push(TocItem::new(text, &id, depth));
        }

        i = end + 1;
    }

    let title = if take_title {
        take_leading_title(&mut events)
    } else {
        None
    };

    let mut html_out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_out, events.into_iter());

    RenderedMarkdown {
        html: html_out,
        toc,
        title,
    }
}

/// Concatenate the visible text of heading content events.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}

/// If the document opens with an H1, remove it and return its text.
fn take_leading_title(events: &mut Vec<Event<'_>>) -> Option<String> {
    if !matches!(
        events.first(),
        Some(Event::Start(Tag::Heading {
            level: HeadingLevel::H1,
            ..
        }))
    ) {
        return None;
    }
    let end = events
        .iter()
        .position(|e| matches!(e, Event::End(TagEnd::Heading(_))))?;
    let title = heading_text(&events[1..end]);
    events.drain(..=end);
    Some(title)
}

/// Anchor id for heading text.
///
/// Lowercases, keeps letters (any script), digits, `-` and `_`, turns
/// whitespace into `-` and drops everything else.
pub fn slugify_anchor(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else if c.is_whitespace() {
                Some('-')
            } else {
                None
            }
        })
        .collect()
}

/// Tracks used anchor ids within one document.
#[derive(Default)]
struct AnchorSet {
    seen: FxHashMap<String, usize>,
}

impl AnchorSet {
    /// Reserve `base`, suffixing `-1`, `-2`, ... on repeats.
    fn claim(&mut self, base: String) -> String {
        let base = if base.is_empty() {
            "heading".to_string()
        } else {
            base
        };

        let mut count = self.seen.get(&base).copied().unwrap_or(0);
        let mut candidate = base.clone();
        while self.seen.contains_key(&candidate) {
            count += 1;
            candidate = format!("{base}-{count}");
        }
        self.seen.insert(base, count);
        self.seen.entry(candidate.clone()).or_insert(0);
        candidate
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_heading_ids_and_toc() {
        let out = render("## Getting Started\n\ntext\n\n### Step `one`\n\n##### Deep", true);

        assert!(out.html.contains(r#"<h2 id="getting-started">Getting Started</h2>"#));
        assert!(out.html.contains(r#"<h3 id="step-one">"#));
        assert!(out.html.contains(r#"<h5 id="deep">"#));

        let urls: Vec<_> = out.toc.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(urls, ["#getting-started", "#step-one"]);
        assert_eq!(out.toc[1].title, "Step one");
        assert_eq!(out.toc[1].depth, 3);
    }

    #[test]
    fn test_duplicate_headings_suffixed() {
        let out = render("## Usage\n\n## Usage\n\n## Usage", true);
        let urls: Vec<_> = out.toc.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(urls, ["#usage", "#usage-1", "#usage-2"]);
    }

    #[test]
    fn test_explicit_heading_id_kept() {
        let out = render("## Install {#setup}", true);
        assert_eq!(out.toc[0].url, "#setup");
        assert_eq!(out.toc[0].title, "Install");
    }

    #[test]
    fn test_unicode_heading() {
        let out = render("## 安裝 步驟!", true);
        assert_eq!(out.toc[0].url, "#安裝-步驟");
    }

    #[test]
    fn test_leading_title_extracted() {
        let out = render("# Welcome\n\nIntro paragraph.", true);
        assert_eq!(out.title.as_deref(), Some("Welcome"));
        assert!(!out.html.contains("<h1"));
        assert!(out.html.contains("<p>Intro paragraph.</p>"));
    }

    #[test]
    fn test_leading_title_kept() {
        let out = render("# Welcome\n\nIntro paragraph.", false);
        assert!(out.title.is_none());
        assert!(out.html.contains(r#"<h1 id="welcome">Welcome</h1>"#));
    }

    #[test]
    fn test_empty_toc() {
        let out = render("Just a paragraph.", true);
        assert!(out.toc.is_empty());
        assert!(out.title.is_none());
    }

    #[test]
    fn test_slugify_anchor() {
        assert_eq!(slugify_anchor("Hello, World!"), "hello-world");
        assert_eq!(slugify_anchor("  a_b-c  "), "a_b-c");
        assert_eq!(slugify_anchor("???"), "");
    }
}
