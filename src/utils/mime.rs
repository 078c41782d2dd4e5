//! MIME type constants for server responses.

/// Content types the dev server answers with.
pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
}
