//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content/docs"    # Markdown source directory (relative to site root)
//! output = "public"           # Output directory for generated HTML (relative to site root)
//! base = "/docs"              # URL prefix pages are served under
//! clean = false               # Remove the output directory before building
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::normalize_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory.
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// URL prefix, `/` for the site root.
    pub base: String,

    /// Clean output directory before building.
    pub clean: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content/docs".into(),
            output: "public".into(),
            base: "/docs".to_string(),
            clean: false,
        }
    }
}

impl BuildSectionConfig {
    pub const BASE: FieldPath = FieldPath::new("build.base");

    /// Check raw values. Runs before [`Self::normalize`].
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.base.starts_with('/') {
            diag.error_with_hint(
                Self::BASE,
                format!("`{}` must start with `/`", self.base),
                format!("base = \"/{}\"", self.base.trim_start_matches('/')),
            );
        }
    }

    /// Resolve directories against `root` and drop a trailing `/` from `base`.
    pub fn normalize(&mut self, root: &Path) {
        self.content = normalize_path(&root.join(&self.content));
        self.output = normalize_path(&root.join(&self.output));

        let trimmed = self.base.trim_end_matches('/');
        self.base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        };
    }
}
