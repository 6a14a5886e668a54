//! CLI command implementations for fhevm-examples.
//!
//! Each module corresponds to a subcommand (`fhevm-examples <command>`). Handlers
//! return the process exit code: an unknown id prints guidance and fails, any
//! other error propagates to `main`.

pub mod create_category;
pub mod create_example;
pub mod generate_docs;
pub mod list;

#[cfg(test)]
pub(crate) mod tests {
    use fhevm_examples_core::config::GeneratorConfig;
    use fhevm_examples_core::registry::{
        CategoryDescriptor, Difficulty, ExampleDescriptor, Registry,
    };

    use crate::AppContext;

    fn example(id: &str) -> ExampleDescriptor {
        ExampleDescriptor {
            id: id.into(),
            title: format!("Title {id}"),
            description: format!("Description of {id}"),
            concept: "Concept text".into(),
            learning_objectives: vec!["Objective".into()],
            features: vec!["FHE.add".into()],
            chapter: "basic".into(),
            difficulty: Difficulty::Beginner,
            contract_file: "Sample.sol".into(),
            test_file: "Sample.ts".into(),
            use_case: "Use case text".into(),
        }
    }

    fn category(id: &str, members: &[&str]) -> CategoryDescriptor {
        CategoryDescriptor {
            id: id.into(),
            title: format!("Category {id}"),
            description: format!("Description of category {id}"),
            overview: "Overview text".into(),
            difficulty: "Beginner".into(),
            examples: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// A context over a temp base template with examples `a` and `b`, a
    /// category `pair` of both, and a category `broken` naming a missing id.
    pub(crate) fn context() -> (tempfile::TempDir, AppContext) {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("base");
        std::fs::create_dir_all(base.join("contracts")).unwrap();
        std::fs::write(
            base.join("package.json"),
            r#"{"name":"fhevm-hardhat-template","description":"Template"}"#,
        )
        .unwrap();

        let sources = root.path().join("sources");
        for id in ["a", "b"] {
            std::fs::create_dir_all(sources.join(id)).unwrap();
            std::fs::write(sources.join(id).join("Sample.sol"), "contract Sample {}").unwrap();
            std::fs::write(sources.join(id).join("Sample.ts"), "describe(\"Sample\")").unwrap();
        }

        let registry = Registry::new(
            vec![example("a"), example("b")],
            vec![category("pair", &["a", "b"]), category("broken", &["a", "missing"])],
        )
        .unwrap();
        let config = GeneratorConfig {
            base_template: base,
            examples_source: sources,
            default_output_dir: root.path().join("out"),
            ..GeneratorConfig::default()
        };
        (root, AppContext { config, registry })
    }
}
