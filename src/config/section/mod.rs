//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docpage.toml`:
//!
//! | Module  | TOML Section | Purpose                                   |
//! |---------|--------------|-------------------------------------------|
//! | `build` | `[build]`    | Content/output paths, URL base            |
//! | `docs`  | `[docs.*]`   | Edit link, category cards, TOC            |
//! | `serve` | `[serve]`    | Development server                        |
//! | `site`  | `[site]`     | Site title and URL                        |

mod build;
mod docs;
mod serve;
mod site;

pub use build::BuildSectionConfig;
pub use docs::DocsSectionConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
