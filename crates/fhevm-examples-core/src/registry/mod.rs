//! Example and category registries.
//!
//! A [`Registry`] is an immutable, insertion-ordered set of
//! [`ExampleDescriptor`]s and [`CategoryDescriptor`]s. Generators take it by
//! reference, so tests can inject a small hand-built registry instead of the
//! [`builtin`] set.
//!
//! Lookups never fail: [`Registry::example`] and [`Registry::category`] return
//! `None` for unknown ids and callers pick the failure policy. The
//! [`Registry::resolve_example`] / [`Registry::resolve_category`] helpers turn
//! that into an error carrying the list of valid ids.

pub mod builtin;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FhevmExamplesError, Result};

/// Display-only difficulty of an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Lowercase identifier, as written in registry files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Capitalized label used in generated markdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One demonstrable example: a contract/test pair plus its documentation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleDescriptor {
    /// Stable slug, used as map key and as the `example-<id>` directory suffix.
    pub id: String,
    pub title: String,
    pub description: String,
    pub concept: String,
    /// Display order only.
    pub learning_objectives: Vec<String>,
    /// fhEVM library operations the example exercises.
    pub features: Vec<String>,
    /// Documentation grouping tag.
    pub chapter: String,
    pub difficulty: Difficulty,
    /// File name under `<examples_source>/<id>/`.
    pub contract_file: String,
    /// File name under `<examples_source>/<id>/`.
    pub test_file: String,
    pub use_case: String,
}

impl ExampleDescriptor {
    /// Directory name used for this example inside an output root.
    pub fn dir_name(&self) -> String {
        format!("example-{}", self.id)
    }

    /// `package.json` name written into the generated project.
    pub fn package_name(&self) -> String {
        format!("fhevm-example-{}", self.id)
    }

    /// Contract file name without its extension (`AccessControl.sol` -> `AccessControl`).
    pub fn contract_name(&self) -> &str {
        Path::new(&self.contract_file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.contract_file)
    }
}

/// A named, ordered group of examples generated together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub overview: String,
    /// Free display label such as `Beginner` or `Mixed`; not derived from members.
    pub difficulty: String,
    /// Member example ids, in generation order.
    pub examples: Vec<String>,
}

impl CategoryDescriptor {
    /// Directory name used for this category inside an output root.
    pub fn dir_name(&self) -> String {
        format!("category-{}", self.id)
    }
}

/// Immutable example + category registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    examples: Vec<ExampleDescriptor>,
    #[serde(default)]
    categories: Vec<CategoryDescriptor>,
}

impl Registry {
    /// Build a registry, rejecting duplicate example or category ids.
    pub fn new(
        examples: Vec<ExampleDescriptor>,
        categories: Vec<CategoryDescriptor>,
    ) -> Result<Self> {
        let registry = Self {
            examples,
            categories,
        };
        registry.check_unique_ids()?;
        Ok(registry)
    }

    /// The shipped fhEVM example set.
    pub fn builtin() -> Self {
        Self {
            examples: builtin::examples(),
            categories: builtin::categories(),
        }
    }

    /// Load a registry from a JSON file with `examples` and `categories` arrays.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| FhevmExamplesError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let registry: Self =
            serde_json::from_str(&contents).map_err(|e| FhevmExamplesError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        registry.check_unique_ids()?;
        Ok(registry)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for example in &self.examples {
            if !seen.insert(example.id.as_str()) {
                return Err(FhevmExamplesError::DuplicateId {
                    kind: "example",
                    id: example.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id.as_str()) {
                return Err(FhevmExamplesError::DuplicateId {
                    kind: "category",
                    id: category.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// All examples in declaration order.
    pub fn examples(&self) -> &[ExampleDescriptor] {
        &self.examples
    }

    /// All categories in declaration order.
    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.categories
    }

    pub fn example(&self, id: &str) -> Option<&ExampleDescriptor> {
        self.examples.iter().find(|e| e.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn example_ids(&self) -> Vec<String> {
        self.examples.iter().map(|e| e.id.clone()).collect()
    }

    pub fn category_ids(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    /// Look up an example, failing with the list of valid ids.
    pub fn resolve_example(&self, id: &str) -> Result<&ExampleDescriptor> {
        self.example(id)
            .ok_or_else(|| FhevmExamplesError::UnknownExample {
                id: id.to_string(),
                available: self.example_ids(),
            })
    }

    /// Look up a category, failing with the list of valid ids.
    pub fn resolve_category(&self, id: &str) -> Result<&CategoryDescriptor> {
        self.category(id)
            .ok_or_else(|| FhevmExamplesError::UnknownCategory {
                id: id.to_string(),
                available: self.category_ids(),
            })
    }

    /// Members of `category` that resolve. Unknown ids are skipped silently.
    pub fn members<'a>(
        &'a self,
        category: &'a CategoryDescriptor,
    ) -> impl Iterator<Item = &'a ExampleDescriptor> + 'a {
        category.examples.iter().filter_map(|id| self.example(id))
    }

    /// Examples grouped by their `chapter` field, chapters in first-seen order.
    pub fn examples_by_chapter(&self) -> Vec<(&str, Vec<&ExampleDescriptor>)> {
        let mut chapters: Vec<(&str, Vec<&ExampleDescriptor>)> = Vec::new();
        for example in &self.examples {
            match chapters.iter().position(|(c, _)| *c == example.chapter) {
                Some(i) => chapters[i].1.push(example),
                None => chapters.push((example.chapter.as_str(), vec![example])),
            }
        }
        chapters
    }

    /// `(category id, member id)` pairs whose member is not a registered example.
    pub fn unresolved_members(&self) -> Vec<(&str, &str)> {
        self.categories
            .iter()
            .flat_map(|c| {
                c.examples
                    .iter()
                    .filter(|id| self.example(id).is_none())
                    .map(move |id| (c.id.as_str(), id.as_str()))
            })
            .collect()
    }
}
