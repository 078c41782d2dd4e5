//! Configuration utility types.
//!
//! | Module   | Purpose                              |
//! |----------|--------------------------------------|
//! | `error`  | `ConfigError` and validation reports |
//! | `field`  | Dotted config field paths            |

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
