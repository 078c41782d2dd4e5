//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `docs` - Page layout and not-found page
//!
//! # Usage
//!
//! ```ignore
//! use embed::docs::{NOT_FOUND_HTML, NotFoundVars};
//!
//! let html = NOT_FOUND_HTML.render(&NotFoundVars { site_title: "Docs", message: "Gone.", home: "/docs/" });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod docs {
    use super::{Template, TemplateVars};

    /// Stylesheet inlined into every page.
    pub const DOCS_CSS: &str = include_str!("docs/docs.css");

    /// Variables for layout.html. Every value is already HTML.
    pub struct LayoutVars<'a> {
        pub site_title: &'a str,
        pub title: &'a str,
        pub head: &'a str,
        pub full: bool,
        pub header: &'a str,
        pub body: &'a str,
        pub cards: &'a str,
        pub footer: &'a str,
        pub toc: &'a str,
    }

    impl TemplateVars for LayoutVars<'_> {
        fn vars(&self) -> Vec<(&'static str, &str)> {
            vec![
                ("SITE_TITLE", self.site_title),
                ("TITLE", self.title),
                ("HEAD", self.head),
                ("CSS", DOCS_CSS),
                ("FULL", if self.full { "true" } else { "false" }),
                ("HEADER", self.header),
                ("BODY", self.body),
                ("CARDS", self.cards),
                ("FOOTER", self.footer),
                ("TOC", self.toc),
            ]
        }
    }

    /// Documentation page layout.
    pub const LAYOUT_HTML: Template<LayoutVars<'static>> =
        Template::new(include_str!("docs/layout.html"));

    /// Variables for not_found.html. Values are already HTML.
    pub struct NotFoundVars<'a> {
        pub site_title: &'a str,
        pub message: &'a str,
        pub home: &'a str,
    }

    impl TemplateVars for NotFoundVars<'_> {
        fn vars(&self) -> Vec<(&'static str, &str)> {
            vec![
                ("SITE_TITLE", self.site_title),
                ("CSS", DOCS_CSS),
                ("MESSAGE", self.message),
                ("HOME", self.home),
            ]
        }
    }

    /// Not-found page, used by `serve` and written as `404.html` by `build`.
    pub const NOT_FOUND_HTML: Template<NotFoundVars<'static>> =
        Template::new(include_str!("docs/not_found.html"));
}
