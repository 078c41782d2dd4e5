//! Path utilities.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`) and
//!   content-relative display paths (`to_slash_relative`)

pub mod fs;

pub use fs::{normalize_path, to_slash_relative};
