//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    /// `(NAME, value)` pairs substituted for `__NAME__` placeholders.
    fn vars(&self) -> Vec<(&'static str, &str)>;

    fn apply(&self, content: &str) -> String {
        fill(content, &self.vars())
    }
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Substitute `__NAME__` placeholders in a single pass.
///
/// Substituted values are never rescanned, so a page body containing
/// `__TITLE__` stays as written. Unknown names are kept verbatim.
pub fn fill(content: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(content.len() + vars.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = content;

    while let Some(start) = rest.find("__") {
        let after = &rest[start + 2..];
        let value = after.find("__").and_then(|end| {
            let name = &after[..end];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });

        match value {
            Some((value, end)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
