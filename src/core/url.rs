//! URL path type for type-safe URL handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input, encode on output

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Always ends with `/` (every address is a page)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from browser URL (strip query string and fragment, then decode
    /// percent-encoding).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_page(&decoded)
    }

    /// Create page URL from a decoded path. Normalizes leading/trailing
    /// slashes; `?` and `#` are ordinary characters here.
    pub fn from_page(decoded: &str) -> Self {
        let inner = decoded.trim().trim_matches('/');

        if inner.is_empty() {
            return Self(Arc::from("/"));
        }

        Self(Arc::from(format!("/{inner}/")))
    }

    /// Join a base path (e.g. `/docs`) with slug segments.
    ///
    /// `("/docs", ["guide", "install"])` -> `/docs/guide/install/`
    pub fn from_segments<S: AsRef<str>>(base: &str, segments: &[S]) -> Self {
        let mut path = base.trim_matches('/').to_string();
        for segment in segments {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(segment.as_ref());
        }
        Self::from_page(&path)
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into non-empty path segments.
    pub fn segments(&self) -> Vec<String> {
        self.0
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Segments after `base`, or `None` if the path is outside `base`.
    ///
    /// `/docs/guide/` with base `/docs` -> `Some(["guide"])`
    pub fn segments_under(&self, base: &str) -> Option<Vec<String>> {
        let base = Self::from_page(base);
        let rest = self.0.strip_prefix(base.as_str())?;
        Some(
            rest.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

        const SEGMENT: &AsciiSet = &CONTROLS
            .add(b' ')
            .add(b'"')
            .add(b'#')
            .add(b'%')
            .add(b'<')
            .add(b'>')
            .add(b'?')
            .add(b'`')
            .add(b'{')
            .add(b'}');

        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Check if this is the site root (`/`).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_browser_chinese() {
        let url = UrlPath::from_browser("/docs/%E4%B8%AD%E6%96%87/");
        assert_eq!(url.as_str(), "/docs/中文/");
    }

    #[test]
    fn test_from_browser_strips_query() {
        let url = UrlPath::from_browser("/docs/guide?v=1");
        assert_eq!(url.as_str(), "/docs/guide/");
    }

    #[test]
    fn test_from_browser_invalid_utf8() {
        let url = UrlPath::from_browser("/docs/%FF/");
        assert_eq!(url.as_str(), "/docs/%FF/");
    }

    #[test]
    fn test_from_page_normalizes_slashes() {
        assert_eq!(UrlPath::from_page("docs/guide").as_str(), "/docs/guide/");
        assert_eq!(UrlPath::from_page("//docs//").as_str(), "/docs/");
        assert_eq!(UrlPath::from_page("").as_str(), "/");
        assert_eq!(UrlPath::from_page("/guide/c#/").as_str(), "/guide/c#/");
    }

    #[test]
    fn test_special_characters_survive_encode_decode() {
        let url = UrlPath::from_segments("/docs", &["guide", "c#", "why?"]);
        assert_eq!(url.as_str(), "/docs/guide/c#/why?/");

        let encoded = url.to_encoded();
        assert_eq!(encoded, "/docs/guide/c%23/why%3F/");
        assert_eq!(UrlPath::from_browser(&encoded), url);
    }

    #[test]
    fn test_from_segments() {
        let url = UrlPath::from_segments("/docs", &["guide", "install"]);
        assert_eq!(url.as_str(), "/docs/guide/install/");

        let empty: [&str; 0] = [];
        assert_eq!(UrlPath::from_segments("/docs", &empty).as_str(), "/docs/");
        assert_eq!(UrlPath::from_segments("/", &["a"]).as_str(), "/a/");
        assert_eq!(UrlPath::from_segments("", &empty).as_str(), "/");
    }

    #[test]
    fn test_segments_under() {
        let url = UrlPath::from_page("/docs/guide/install/");
        assert_eq!(
            url.segments_under("/docs"),
            Some(vec!["guide".to_string(), "install".to_string()])
        );
        assert_eq!(UrlPath::from_page("/docs/").segments_under("/docs"), Some(vec![]));
        assert_eq!(url.segments_under("/blog"), None);
        assert_eq!(url.segments_under("/").map(|s| s.len()), Some(3));
    }

    #[test]
    fn test_segments_under_requires_segment_boundary() {
        let url = UrlPath::from_page("/docsearch/");
        assert_eq!(url.segments_under("/docs"), None);
    }

    #[test]
    fn test_to_encoded() {
        let url = UrlPath::from_page("/docs/中文 頁/");
        assert_eq!(url.to_encoded(), "/docs/%E4%B8%AD%E6%96%87%20%E9%A0%81/");
    }

    #[test]
    fn test_serialize_deserialize() {
        let url = UrlPath::from_page("/docs/中文/");
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""/docs/中文/""#);

        let parsed: UrlPath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, url);
    }
}
