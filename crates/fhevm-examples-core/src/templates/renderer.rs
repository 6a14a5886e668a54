//! Template renderers for generated READMEs and documentation pages.
//!
//! Two flavors are used:
//!
//! - [`TemplateRenderer`] wraps [`handlebars::Handlebars`] in **strict mode** with
//!   HTML escaping disabled. It renders the markdown templates this crate ships
//!   (category READMEs, per-example docs, the docs index and navigation).
//! - [`PlaceholderTemplate`] performs literal `{{UPPER_SNAKE_CASE}}` substitution
//!   on user-supplied README templates. Unknown tokens are left untouched, which
//!   Handlebars cannot express, so these templates never go through it.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "title": "FHEVM Basics" });
//! let output = renderer.render(embedded::CATEGORY_README, &data)?;
//! ```

use std::sync::OnceLock;

use handlebars::Handlebars;
use regex::Regex;
use serde_json::Value;

use crate::error::{FhevmExamplesError, Result};

/// Handlebars renderer for markdown output.
///
/// Strict mode turns a `{{variable}}` missing from the data context into an
/// error instead of an empty string.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| FhevmExamplesError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("valid placeholder regex")
    })
}

/// Literal `{{TOKEN}}` substitution for README templates.
///
/// Every occurrence of a known token is replaced. Tokens with no value are
/// kept verbatim.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTemplate {
    values: Vec<(String, String)>,
}

impl PlaceholderTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or overwrite) the value for `TOKEN`.
    pub fn set(&mut self, token: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.values.iter_mut().find(|(t, _)| t == token) {
            Some(entry) => entry.1 = value,
            None => self.values.push((token.to_string(), value)),
        }
        self
    }

    /// Register a list rendered as newline-joined `- item` bullets.
    pub fn set_list(&mut self, token: &str, items: &[String]) -> &mut Self {
        self.set(token, bullet_list(items))
    }

    /// Tokens with a registered value, in registration order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(t, _)| t.as_str())
    }

    /// Replace every known `{{TOKEN}}` in `template`.
    ///
    /// Substituted values are never rescanned, so a value that itself contains
    /// `{{...}}` is written out literally.
    pub fn render(&self, template: &str) -> String {
        placeholder_pattern()
            .replace_all(template, |caps: &regex::Captures<'_>| {
                let token = &caps[1];
                match self.values.iter().find(|(t, _)| t == token) {
                    Some((_, value)) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Render items as `- item` lines joined with `\n`.
pub fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Distinct `{{TOKEN}}` names appearing in `text`, in first-seen order.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for caps in placeholder_pattern().captures_iter(text) {
        let token = &caps[1];
        if !found.iter().any(|t| t == token) {
            found.push(token.to_string());
        }
    }
    found
}
