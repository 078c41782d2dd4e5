//! Count formatting for log lines.

/// Format count with noun, adding an `s` unless the count is one.
///
/// `plural_count(1, "page")` -> `"1 page"`, `plural_count(0, "draft")` -> `"0 drafts"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
