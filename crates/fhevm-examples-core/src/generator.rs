//! Single-example generation.
//!
//! [`ExampleGenerator::generate`] turns one registry entry into a standalone
//! Hardhat project in five steps:
//!
//! 1. copy the base template to `<output>/example-<id>`
//! 2. replace the template's files in `contracts/` with the example contract
//! 3. replace the template's files in `test/` with the example test
//! 4. render `README.md` from the placeholder template
//! 5. rewrite `name` / `description` in `package.json`
//!
//! A missing contract, test, or manifest only logs a warning. An unknown id is
//! rejected before anything touches the filesystem.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::project;
use crate::registry::{ExampleDescriptor, Registry};
use crate::templates::embedded;
use crate::templates::renderer::{placeholders, PlaceholderTemplate};

/// Outcome of generating one example.
#[derive(Debug, Clone)]
pub struct GeneratedExample {
    pub id: String,
    /// Absolute path of `example-<id>`.
    pub path: PathBuf,
    /// Overlaid contract, if the source existed.
    pub contract: Option<PathBuf>,
    /// Overlaid test, if the source existed.
    pub test: Option<PathBuf>,
    /// Whether `package.json` was found and rewritten.
    pub manifest_updated: bool,
}

/// Generates standalone example projects from a [`Registry`].
pub struct ExampleGenerator<'a> {
    registry: &'a Registry,
    config: &'a GeneratorConfig,
}

impl<'a> ExampleGenerator<'a> {
    pub fn new(registry: &'a Registry, config: &'a GeneratorConfig) -> Self {
        Self { registry, config }
    }

    /// Generate `example-<id>` under `output_dir`.
    pub fn generate(&self, example_id: &str, output_dir: &Path) -> Result<GeneratedExample> {
        let example = self.registry.resolve_example(example_id)?;
        let readme_template = self.load_readme_template()?;
        self.generate_descriptor(example, output_dir, &readme_template)
    }

    /// Load the configured README template, or the embedded default.
    fn load_readme_template(&self) -> Result<String> {
        match &self.config.readme_template {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => Ok(embedded::EXAMPLE_README.to_string()),
        }
    }

    fn generate_descriptor(
        &self,
        example: &ExampleDescriptor,
        output_dir: &Path,
        readme_template: &str,
    ) -> Result<GeneratedExample> {
        let dest = output_dir.join(example.dir_name());
        tracing::info!("generating {} into {}", example.id, dest.display());

        if self.config.clean {
            project::clear_dir(&dest)?;
        }
        project::copy_dir_recursive(&self.config.base_template, &dest)?;

        let source_dir = self.config.examples_source.join(&example.id);
        let contracts_dir = dest.join(project::CONTRACTS_DIR);
        project::clear_slot(&contracts_dir)?;
        let contract =
            project::overlay_file(&source_dir.join(&example.contract_file), &contracts_dir)?;
        let test_dir = dest.join(project::TEST_DIR);
        project::clear_slot(&test_dir)?;
        let test = project::overlay_file(&source_dir.join(&example.test_file), &test_dir)?;

        let readme = render_readme(example, readme_template);
        let leftover = placeholders(&readme);
        if !leftover.is_empty() {
            tracing::warn!(
                "README for {} keeps unknown placeholders: {}",
                example.id,
                leftover.join(", ")
            );
        }
        std::fs::write(dest.join(project::README_FILE), readme)?;

        let manifest_updated = project::update_manifest(
            &dest.join(project::MANIFEST_FILE),
            &example.package_name(),
            &example.description,
        )?;

        Ok(GeneratedExample {
            id: example.id.clone(),
            path: dest.canonicalize()?,
            contract,
            test,
            manifest_updated,
        })
    }
}

/// Placeholder values for one example's README.
pub fn readme_placeholders(example: &ExampleDescriptor) -> PlaceholderTemplate {
    let mut tmpl = PlaceholderTemplate::new();
    tmpl.set("EXAMPLE_ID", example.id.as_str())
        .set("EXAMPLE_TITLE", example.title.as_str())
        .set("EXAMPLE_DESCRIPTION", example.description.as_str())
        .set("CONCEPT", example.concept.as_str())
        .set_list("LEARNING_OBJECTIVES", &example.learning_objectives)
        .set_list("FEATURES", &example.features)
        .set("DIFFICULTY", example.difficulty.label())
        .set("CHAPTER", example.chapter.as_str())
        .set("CONTRACT_FILE", example.contract_file.as_str())
        .set("CONTRACT_NAME", example.contract_name())
        .set("TEST_FILE", example.test_file.as_str())
        .set("USE_CASE", example.use_case.as_str())
        .set("PACKAGE_NAME", example.package_name());
    tmpl
}

/// Render a README template for `example`.
pub fn render_readme(example: &ExampleDescriptor, template: &str) -> String {
    readme_placeholders(example).render(template)
}
