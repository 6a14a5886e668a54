//! Template system for example scaffolding and documentation.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module and rendered at runtime by [`renderer`].
//!
//! ## Template kinds
//!
//! - `example-readme.md.tmpl`: README of a generated example. Uses literal
//!   `{{UPPER_SNAKE_CASE}}` tokens rendered by [`renderer::PlaceholderTemplate`],
//!   so a user-supplied replacement can contain tokens this tool doesn't know.
//! - `*.md.hbs`: category README and documentation pages, rendered with
//!   [Handlebars](https://handlebarsjs.com/) via [`renderer::TemplateRenderer`].
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
