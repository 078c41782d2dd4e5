//! HTML output for documents and the not-found page.

use std::fmt::Write;

use super::{DocsPage, EditLink, RenderOptions};
use crate::core::UrlPath;
use crate::embed::docs::{LAYOUT_HTML, LayoutVars, NOT_FOUND_HTML, NotFoundVars};
use crate::page::TocItem;
use crate::render::Card;
use crate::utils::html::{escape, escape_attr};

const TOC_LABEL: &str = "On this page";
const LAST_UPDATE_LABEL: &str = "Last updated on";

/// Render a document with the embedded layout.
pub fn render_html(doc: &DocsPage<'_>, opts: &RenderOptions) -> String {
    let title = escape(doc.title);
    let site_title = escape(&opts.site_title);

    LAYOUT_HTML.render(&LayoutVars {
        site_title: &site_title,
        title: &title,
        head: &head(doc, opts),
        full: doc.full,
        header: &header(doc),
        body: doc.body,
        cards: &doc.cards.as_deref().map(cards).unwrap_or_default(),
        footer: &footer(doc),
        toc: &toc_aside(doc),
    })
}

/// Render the not-found page, naming the request path when known.
pub fn render_not_found(path: Option<&str>, opts: &RenderOptions) -> String {
    let home = UrlPath::from_page(&opts.base).to_encoded();
    let message = match path {
        Some(path) => format!("No page at <code>{}</code>.", escape(path)),
        None => "This page does not exist.".to_string(),
    };
    NOT_FOUND_HTML.render(&NotFoundVars {
        site_title: &escape(&opts.site_title),
        message: &message,
        home: &escape_attr(&home),
    })
}

// ============================================================================
// fragments
// ============================================================================

fn head(doc: &DocsPage<'_>, opts: &RenderOptions) -> String {
    let mut out = String::new();
    if let Some(description) = doc.description {
        writeln!(
            out,
            r#"  <meta name="description" content="{}">"#,
            escape_attr(description)
        )
        .ok();
    }
    if let Some(canonical) = opts
        .site_url
        .as_ref()
        .and_then(|site| site.join(doc.url.to_encoded().trim_start_matches('/')).ok())
    {
        writeln!(
            out,
            r#"  <link rel="canonical" href="{}">"#,
            escape_attr(canonical.as_str())
        )
        .ok();
    }
    out
}

fn header(doc: &DocsPage<'_>) -> String {
    let mut out = format!(r#"<h1 class="docs-title">{}</h1>"#, escape(doc.title));
    if let Some(description) = doc.description {
        write!(
            out,
            r#"<p class="docs-description">{}</p>"#,
            escape(description)
        )
        .ok();
    }
    if doc.toc_enabled {
        write!(
            out,
            r#"<details class="docs-toc-popover"><summary>{TOC_LABEL}</summary>{}{}</details>"#,
            toc_list(doc.toc),
            edit_footer(doc.edit.as_ref()),
        )
        .ok();
    }
    out
}

fn cards(cards: &[Card]) -> String {
    let mut out = String::from(r#"<div class="docs-cards">"#);
    for card in cards {
        write!(
            out,
            r#"<a class="docs-card" href="{}"><h3>{}</h3><p>{}</p></a>"#,
            escape_attr(&card.url.to_encoded()),
            escape(&card.title),
            escape(&card.description),
        )
        .ok();
    }
    out.push_str("</div>");
    out
}

fn footer(doc: &DocsPage<'_>) -> String {
    match doc.last_update {
        Some(date) => format!(
            r#"<footer class="docs-footer"><p>{LAST_UPDATE_LABEL} <time datetime="{}">{}</time></p></footer>"#,
            escape_attr(date),
            escape(date),
        ),
        None => String::new(),
    }
}

fn toc_aside(doc: &DocsPage<'_>) -> String {
    if !doc.toc_enabled {
        return String::new();
    }
    format!(
        r#"<aside class="docs-toc"><h2>{TOC_LABEL}</h2>{}{}</aside>"#,
        toc_list(doc.toc),
        edit_footer(doc.edit.as_ref()),
    )
}

fn toc_list(items: &[TocItem]) -> String {
    let mut out = String::from("<ol>");
    for item in items {
        write!(
            out,
            r#"<li data-depth="{}"><a href="{}">{}</a></li>"#,
            item.depth,
            escape_attr(&item.url),
            escape(&item.title),
        )
        .ok();
    }
    out.push_str("</ol>");
    out
}

fn edit_footer(edit: Option<&EditLink>) -> String {
    match edit {
        Some(edit) => format!(
            r#"<div class="docs-toc-footer"><a href="{}" target="_blank" rel="noreferrer noopener">{}</a></div>"#,
            escape_attr(&edit.href),
            escape(&edit.label),
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Page, PageData, PageFile};
    use crate::render::{render_page, test_source};
    use crate::source::MemorySource;

    fn slug(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    fn page_with_toc() -> MemorySource {
        let page = Page::new(
            "/docs",
            PageFile::from_relative("guide/install.md"),
            PageData {
                title: "Install <fast>".into(),
                description: Some("Get \"it\" running".into()),
                body: "<p>__TITLE__ stays</p>".into(),
                toc: vec![TocItem::new("Steps", "steps", 2)],
                last_modified: Some("2024-05-01".into()),
                ..Default::default()
            },
        );
        MemorySource::new(vec![page]).unwrap()
    }

    #[test]
    fn test_document_html() {
        let source = page_with_toc();
        let opts = RenderOptions::default();
        let doc = render_page(&source, Some(slug(&["guide", "install"]).as_slice()), &opts).unwrap();
        let html = render_html(&doc, &opts);

        assert!(html.contains("<title>Install &lt;fast&gt; | Docs</title>"));
        assert!(html.contains(r#"<h1 class="docs-title">Install &lt;fast&gt;</h1>"#));
        assert!(html.contains(r#"content="Get &quot;it&quot; running""#));
        assert!(html.contains("<p>__TITLE__ stays</p>"));
        assert!(html.contains(r##"<li data-depth="2"><a href="#steps">Steps</a></li>"##));
        assert!(html.contains(r#"<time datetime="2024-05-01">"#));
        assert!(html.contains(r#"data-full="false""#));
        assert!(!html.contains("docs-cards"));
        // edit link in the aside footer and the popover footer
        assert_eq!(html.matches("content/docs/guide/install.md").count(), 2);
    }

    #[test]
    fn test_no_toc_no_aside() {
        let source = test_source(&[("a.md", None)]);
        let opts = RenderOptions::default();
        let doc = render_page(&source, Some(slug(&["a"]).as_slice()), &opts).unwrap();
        let html = render_html(&doc, &opts);

        assert!(!html.contains("docs-toc"));
        assert!(!html.contains("docs-footer"));
    }

    #[test]
    fn test_category_cards_html() {
        let source = test_source(&[
            ("guide/index.md", None),
            ("guide/install.md", Some("Get it running")),
            ("guide/config.md", None),
        ]);
        let opts = RenderOptions::default();
        let doc = render_page(&source, Some(slug(&["guide"]).as_slice()), &opts).unwrap();
        let html = render_html(&doc, &opts);

        let install = html.find(r#"href="/docs/guide/install/""#).unwrap();
        let config = html.find(r#"href="/docs/guide/config/""#).unwrap();
        assert!(install < config);
        assert!(html.contains("<p>沒有介紹</p>"));
    }

    #[test]
    fn test_canonical_link() {
        let source = test_source(&[("guide/安裝.md", None)]);
        let opts = RenderOptions {
            site_url: url::Url::parse("https://docs.example.com/").ok(),
            ..Default::default()
        };
        let doc = render_page(&source, Some(slug(&["guide", "安裝"]).as_slice()), &opts).unwrap();
        let html = render_html(&doc, &opts);

        assert!(html.contains(
            r#"<link rel="canonical" href="https://docs.example.com/docs/guide/%E5%AE%89%E8%A3%9D/">"#
        ));
    }

    #[test]
    fn test_canonical_link_under_sub_path() {
        let source = test_source(&[("guide/install.md", None)]);
        let config = crate::config::test_parse_config(
            "[site]\nurl = \"https://org.github.io/project\"",
        );
        let opts = RenderOptions::from_config(&config);
        let doc = render_page(&source, Some(slug(&["guide", "install"]).as_slice()), &opts).unwrap();
        let html = render_html(&doc, &opts);

        assert!(html.contains(
            r#"<link rel="canonical" href="https://org.github.io/project/docs/guide/install/">"#
        ));
    }

    #[test]
    fn test_not_found_html() {
        let html = render_not_found(Some("/docs/<x>/"), &RenderOptions::default());
        assert!(html.contains("<code>/docs/&lt;x&gt;/</code>"));
        assert!(html.contains(r#"<a href="/docs/">"#));

        let html = render_not_found(None, &RenderOptions::default());
        assert!(html.contains("This page does not exist."));
        assert!(!html.contains("__MESSAGE__"));
    }
}
