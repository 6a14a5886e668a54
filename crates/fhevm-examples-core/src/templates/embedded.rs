//! Compile-time embedded templates.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/fhevm-examples-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT edit a `.hbs` file without checking that its variables still match the
//! JSON context built by the docs and category renderers.

// -------------------------------------------------------
// Example scaffolding
// -------------------------------------------------------

/// Default README for a generated example (`{{TOKEN}}` placeholders).
pub const EXAMPLE_README: &str = include_str!("../../../../templates/example-readme.md.tmpl");

/// README written at the root of a generated category.
pub const CATEGORY_README: &str = include_str!("../../../../templates/category-readme.md.hbs");

// -------------------------------------------------------
// Documentation
// -------------------------------------------------------

pub const DOCS_EXAMPLE: &str = include_str!("../../../../templates/docs/example.md.hbs");
pub const DOCS_README: &str = include_str!("../../../../templates/docs/readme.md.hbs");
pub const DOCS_SUMMARY: &str = include_str!("../../../../templates/docs/summary.md.hbs");
