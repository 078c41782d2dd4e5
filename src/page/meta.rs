//! Page metadata from markdown frontmatter.

use serde::Deserialize;

/// Page metadata from `---` (YAML-like) or `+++` (TOML) frontmatter
///
/// # Standard Fields
///
/// | Field           | Type     | Description                          |
/// |-----------------|----------|--------------------------------------|
/// | `title`         | `String` | Page title                           |
/// | `description`   | `String` | Short description under the title    |
/// | `full`          | `bool`   | Full-width layout (default: false)   |
/// | `last-modified` | `String` | Last update date, overrides file mtime |
/// | `draft`         | `bool`   | Skip the page (default: false)       |
///
/// Other fields are ignored.
#[derive(Debug, Clone, Default, serde::Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub full: bool,
    #[serde(alias = "last_modified", alias = "lastModified")]
    pub last_modified: Option<String>,
    pub draft: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_default() {
        let meta = PageMeta::default();
        assert!(meta.title.is_none());
        assert!(meta.description.is_none());
        assert!(!meta.full);
        assert!(!meta.draft);
    }

    #[test]
    fn test_page_meta_deserialize() {
        let meta: PageMeta = toml::from_str(
            "title = \"Install\"\ndescription = \"How to install\"\nfull = true\nlast-modified = \"2024-03-01\"",
        )
        .unwrap();
        assert_eq!(meta.title.as_deref(), Some("Install"));
        assert_eq!(meta.description.as_deref(), Some("How to install"));
        assert!(meta.full);
        assert_eq!(meta.last_modified.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_page_meta_last_modified_aliases() {
        let meta: PageMeta = toml::from_str("lastModified = \"2024-03-01\"").unwrap();
        assert_eq!(meta.last_modified.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_page_meta_ignores_unknown_fields() {
        let meta: PageMeta = toml::from_str("title = \"T\"\nicon = \"book\"\nweight = 3").unwrap();
        assert_eq!(meta.title.as_deref(), Some("T"));
    }
}
