//! Page metadata projection.

use serde::Serialize;

use super::RenderError;
use crate::source::PageSource;

/// Head metadata of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Resolve `slug` and copy its title and description.
pub fn generate_metadata<S: PageSource + ?Sized>(
    source: &S,
    slug: Option<&[String]>,
) -> Result<Metadata, RenderError> {
    let page = source
        .get_page(slug)
        .ok_or_else(|| RenderError::not_found(slug))?;

    Ok(Metadata {
        title: page.data.title.clone(),
        description: page.data.description.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Slug;
    use crate::render::test_source;

    fn slug(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_metadata_copied_verbatim() {
        let source = test_source(&[
            ("guide/install.md", Some("How to install")),
            ("guide/config.md", None),
        ]);

        let meta = generate_metadata(&source, Some(slug(&["guide", "install"]).as_slice())).unwrap();
        assert_eq!(meta.title, "install");
        assert_eq!(meta.description.as_deref(), Some("How to install"));

        let meta = generate_metadata(&source, Some(slug(&["guide", "config"]).as_slice())).unwrap();
        assert!(meta.description.is_none());
    }

    #[test]
    fn test_missing_page() {
        let source = test_source(&[("index.md", None)]);
        let err = generate_metadata(&source, Some(slug(&["missing", "path"]).as_slice())).unwrap_err();
        assert_eq!(
            err,
            RenderError::PageNotFound {
                slug: Slug::from_segments(&["missing", "path"])
            }
        );
    }

    #[test]
    fn test_metadata_json_omits_missing_description() {
        let meta = Metadata {
            title: "Home".into(),
            description: None,
        };
        assert_eq!(serde_json::to_string(&meta).unwrap(), r#"{"title":"Home"}"#);
    }
}
