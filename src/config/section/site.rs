//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Coffee Hub Docs"
//! url = "https://docs.example.com"    # Enables <link rel="canonical">
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Shown after the page title in `<title>`.
    pub title: String,

    /// Absolute site URL.
    pub url: Option<String>,
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                Self::URL,
                format!("`{url}` is not an absolute URL"),
                "include the scheme, e.g. https://docs.example.com",
            );
        }
    }
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "Docs".to_string(),
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_site_config() {
        let config =
            test_parse_config("[site]\ntitle = \"Coffee\"\nurl = \"https://docs.example.com\"");
        assert_eq!(config.site.title, "Coffee");
        assert_eq!(config.site.url.as_deref(), Some("https://docs.example.com"));

        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_site_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Docs");
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_relative_url_rejected() {
        let config = test_parse_config("[site]\nurl = \"docs.example.com\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
    }
}
