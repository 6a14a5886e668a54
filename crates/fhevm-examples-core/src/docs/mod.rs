//! GitBook-style documentation generated from the registry and annotated tests.
//!
//! [`DocsGenerator::generate_all`] writes:
//!
//! ```text
//! <docs>/
//! ├── README.md            # overview, per-category tables, chapter listing
//! ├── SUMMARY.md           # GitBook navigation
//! └── examples/<id>.md     # one page per registered example
//! ```
//!
//! Rerunning overwrites everything; nothing is diffed or cleaned up.

pub mod extract;
pub mod render;

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::registry::{ExampleDescriptor, Registry};
use crate::templates::renderer::TemplateRenderer;

pub use extract::{extract, DocSection, DEFAULT_CHAPTER};

const EXAMPLES_DIR: &str = "examples";
const README_FILE: &str = "README.md";
const SUMMARY_FILE: &str = "SUMMARY.md";

/// Files written by one documentation run.
#[derive(Debug, Clone)]
pub struct DocsReport {
    pub readme: PathBuf,
    pub summary: PathBuf,
    /// `(example id, page path, extracted section count)`, in registry order.
    pub pages: Vec<(String, PathBuf, usize)>,
}

/// Documentation generator over a [`Registry`].
pub struct DocsGenerator<'a> {
    registry: &'a Registry,
    config: &'a GeneratorConfig,
    renderer: TemplateRenderer,
}

impl<'a> DocsGenerator<'a> {
    pub fn new(registry: &'a Registry, config: &'a GeneratorConfig) -> Self {
        Self {
            registry,
            config,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Path of the annotated test file for `example`.
    pub fn test_file_path(&self, example: &ExampleDescriptor) -> PathBuf {
        self.config
            .examples_source
            .join(&example.id)
            .join(&example.test_file)
    }

    /// Markdown page for one example, built from its test file's sections.
    pub fn render_example_doc(&self, example: &ExampleDescriptor) -> Result<(String, usize)> {
        let sections = extract(&self.test_file_path(example))?;
        let doc = render::render_example_doc(&self.renderer, example, &sections)?;
        Ok((doc, sections.len()))
    }

    pub fn render_summary(&self) -> Result<String> {
        render::render_summary(&self.renderer, self.registry)
    }

    pub fn render_readme(&self) -> Result<String> {
        render::render_readme(&self.renderer, self.registry)
    }

    /// Write the README, the navigation manifest, and every example page.
    pub fn generate_all(&self, output_dir: &Path) -> Result<DocsReport> {
        let examples_dir = output_dir.join(EXAMPLES_DIR);
        std::fs::create_dir_all(&examples_dir)?;

        let readme = output_dir.join(README_FILE);
        std::fs::write(&readme, self.render_readme()?)?;
        let summary = output_dir.join(SUMMARY_FILE);
        std::fs::write(&summary, self.render_summary()?)?;

        let mut pages = Vec::with_capacity(self.registry.examples().len());
        for example in self.registry.examples() {
            let (doc, section_count) = self.render_example_doc(example)?;
            let path = examples_dir.join(format!("{}.md", example.id));
            std::fs::write(&path, doc)?;
            tracing::info!("wrote {} ({section_count} sections)", path.display());
            pages.push((example.id.clone(), path, section_count));
        }

        Ok(DocsReport {
            readme,
            summary,
            pages,
        })
    }
}
