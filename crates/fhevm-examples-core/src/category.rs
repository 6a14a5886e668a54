//! Category generation: several examples side by side plus a shared README.
//!
//! Members are generated sequentially in declared order. A failure partway
//! through leaves the earlier examples on disk.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::generator::{ExampleGenerator, GeneratedExample};
use crate::project;
use crate::registry::{CategoryDescriptor, Registry};
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Outcome of generating one category.
#[derive(Debug, Clone)]
pub struct GeneratedCategory {
    pub id: String,
    /// Path of `category-<id>`.
    pub path: PathBuf,
    /// Generated members, in declared order.
    pub examples: Vec<GeneratedExample>,
}

/// Generates `category-<id>` directories from a [`Registry`].
pub struct CategoryGenerator<'a> {
    registry: &'a Registry,
    examples: ExampleGenerator<'a>,
    renderer: TemplateRenderer,
}

impl<'a> CategoryGenerator<'a> {
    pub fn new(registry: &'a Registry, config: &'a GeneratorConfig) -> Self {
        Self {
            registry,
            examples: ExampleGenerator::new(registry, config),
            renderer: TemplateRenderer::new(),
        }
    }

    /// Generate every member of `category_id` under `output_dir/category-<id>`.
    ///
    /// Calls `on_example` after each member so callers can report progress.
    pub fn generate_with(
        &self,
        category_id: &str,
        output_dir: &Path,
        mut on_example: impl FnMut(usize, usize, &GeneratedExample),
    ) -> Result<GeneratedCategory> {
        let category = self.registry.resolve_category(category_id)?;

        let category_dir = output_dir.join(category.dir_name());
        std::fs::create_dir_all(&category_dir)?;
        tracing::info!(
            "generating category {} ({} examples) into {}",
            category.id,
            category.examples.len(),
            category_dir.display()
        );

        let total = category.examples.len();
        let mut generated = Vec::with_capacity(total);
        for (i, member) in category.examples.iter().enumerate() {
            let example = self.examples.generate(member, &category_dir)?;
            on_example(i + 1, total, &example);
            generated.push(example);
        }

        let readme = self.render_readme(category)?;
        std::fs::write(category_dir.join(project::README_FILE), readme)?;

        Ok(GeneratedCategory {
            id: category.id.clone(),
            path: category_dir.canonicalize()?,
            examples: generated,
        })
    }

    /// Generate every member of `category_id` under `output_dir/category-<id>`.
    pub fn generate(&self, category_id: &str, output_dir: &Path) -> Result<GeneratedCategory> {
        self.generate_with(category_id, output_dir, |_, _, _| {})
    }

    /// Render the category README. Members missing from the registry are skipped.
    pub fn render_readme(&self, category: &CategoryDescriptor) -> Result<String> {
        let examples: Vec<_> = self
            .registry
            .members(category)
            .enumerate()
            .map(|(i, e)| {
                json!({
                    "position": i + 1,
                    "id": e.id,
                    "dir_name": e.dir_name(),
                    "title": e.title,
                    "difficulty": e.difficulty.label(),
                    "description": e.description,
                    "learning_objectives": e.learning_objectives,
                })
            })
            .collect();

        let data = json!({
            "id": category.id,
            "title": category.title,
            "description": category.description,
            "overview": category.overview,
            "difficulty": category.difficulty,
            "example_count": examples.len(),
            "examples": examples,
            "narrative": learning_path(&category.difficulty),
        });

        self.renderer.render(embedded::CATEGORY_README, &data)
    }
}

/// Boilerplate learning-path text keyed on a category's difficulty label.
pub fn learning_path(difficulty: &str) -> &'static str {
    match difficulty {
        "Beginner" => {
            "These examples assume no prior experience with encrypted computation. Work \
             through them in order: each one introduces a single concept and its tests show \
             exactly how encrypted values are created, combined, and decrypted."
        }
        "Mixed" => {
            "This category mixes beginner and advanced material. Start with the first \
             examples to learn the core operations, then move on to the later ones, which \
             combine those operations into complete applications."
        }
        _ => {
            "These examples build on the basics. Make sure you are comfortable with encrypted \
             types, access control, and FHE.select before starting, and read the tests \
             alongside the contracts to follow how each protocol step is verified."
        }
    }
}
