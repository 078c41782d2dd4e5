//! Config field path, as shown in validation reports.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a config field, e.g. `docs.edit.url`.
///
/// Sections declare theirs as constants next to the field:
///
/// ```ignore
/// impl EditConfig {
///     pub const URL: FieldPath = FieldPath::new("docs.edit.url");
/// }
///
/// diag.error(EditConfig::URL, "missing `{path}` placeholder");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
