//! `[docs]` section configuration.
//!
//! Presentation settings of documentation pages.
//!
//! # Example
//!
//! ```toml
//! [docs.edit]
//! enable = true
//! url = "https://github.com/Coffee-Hub-Club/docs/blob/main/content/docs/{path}"
//! label = "在 GitHub 上編輯"
//!
//! [docs.category]
//! fallback_description = "沒有介紹"    # Card text for pages without a description
//!
//! [docs.toc]
//! enable = true                       # Pages without headings never show a TOC
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::render::PATH_PLACEHOLDER;

pub const DEFAULT_EDIT_URL: &str =
    "https://github.com/Coffee-Hub-Club/docs/blob/main/content/docs/{path}";
pub const DEFAULT_EDIT_LABEL: &str = "在 GitHub 上編輯";
pub const DEFAULT_FALLBACK_DESCRIPTION: &str = "沒有介紹";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSectionConfig {
    pub edit: EditConfig,
    pub category: CategoryConfig,
    pub toc: TocConfig,
}

impl DocsSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.edit.validate(diag);
    }
}

/// "Edit on GitHub" link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    pub enable: bool,
    /// Link template; `{path}` becomes the content-relative file path.
    pub url: String,
    pub label: String,
}

impl EditConfig {
    pub const URL: FieldPath = FieldPath::new("docs.edit.url");

    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && !self.url.contains(PATH_PLACEHOLDER) {
            diag.error_with_hint(
                Self::URL,
                format!("missing `{PATH_PLACEHOLDER}` placeholder"),
                "or set `docs.edit.enable = false`",
            );
        }
    }
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            enable: true,
            url: DEFAULT_EDIT_URL.to_string(),
            label: DEFAULT_EDIT_LABEL.to_string(),
        }
    }
}

/// Category index cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub fallback_description: String,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            fallback_description: DEFAULT_FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

/// Table of contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    pub enable: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_docs_config_defaults() {
        let config = test_parse_config("");
        assert!(config.docs.edit.enable);
        assert_eq!(config.docs.edit.url, DEFAULT_EDIT_URL);
        assert_eq!(config.docs.edit.label, DEFAULT_EDIT_LABEL);
        assert_eq!(
            config.docs.category.fallback_description,
            DEFAULT_FALLBACK_DESCRIPTION
        );
        assert!(config.docs.toc.enable);
    }

    #[test]
    fn test_docs_config_partial_override() {
        let config = test_parse_config("[docs.edit]\nlabel = \"Edit this page\"");
        assert_eq!(config.docs.edit.label, "Edit this page");
        // url keeps its default
        assert_eq!(config.docs.edit.url, DEFAULT_EDIT_URL);
    }

    #[test]
    fn test_edit_url_requires_placeholder() {
        let config = test_parse_config("[docs.edit]\nurl = \"https://example.com/edit\"");
        let mut diag = ConfigDiagnostics::new();
        config.docs.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, EditConfig::URL);
    }

    #[test]
    fn test_disabled_edit_skips_placeholder_check() {
        let config = test_parse_config(
            "[docs.edit]\nenable = false\nurl = \"https://example.com/edit\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.docs.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
