//! Static path enumeration.

use serde::Serialize;

use crate::page::Slug;
use crate::source::PageSource;

/// Path descriptor for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticParam {
    pub slug: Slug,
}

/// One descriptor per known page, in listing order.
pub fn generate_static_params<S: PageSource + ?Sized>(source: &S) -> Vec<StaticParam> {
    source
        .get_pages()
        .iter()
        .map(|page| StaticParam {
            slug: page.slugs.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_source;

    #[test]
    fn test_one_param_per_page() {
        let source = test_source(&[
            ("index.md", None),
            ("guide/index.md", None),
            ("guide/install.md", None),
            ("guide/config.md", None),
        ]);

        let params = generate_static_params(&source);
        assert_eq!(params.len(), source.get_pages().len());
        for (param, page) in params.iter().zip(source.get_pages()) {
            assert_eq!(param.slug, page.slugs);
        }
        assert!(params[0].slug.is_empty());
    }

    #[test]
    fn test_params_json() {
        let source = test_source(&[("index.md", None), ("guide/install.md", None)]);
        let json = serde_json::to_string(&generate_static_params(&source)).unwrap();
        assert_eq!(json, r#"[{"slug":[]},{"slug":["guide","install"]}]"#);
    }

    #[test]
    fn test_empty_source() {
        let source = test_source(&[]);
        assert!(generate_static_params(&source).is_empty());
    }
}
