//! Markdown rendering for the documentation site.
//!
//! All three pages are pure functions of the registry (and, for example
//! pages, the extracted sections). Chapters always come from the registry's
//! `chapter` field, never from the `@chapter` markers inside test files.

use serde_json::{json, Value};

use crate::error::Result;
use crate::registry::{ExampleDescriptor, Registry};
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

use super::extract::DocSection;

/// Human heading for a chapter slug (`access-control` -> `Access Control`).
pub fn chapter_heading(chapter: &str) -> String {
    chapter
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn example_link(example: &ExampleDescriptor) -> Value {
    json!({
        "id": example.id,
        "title": example.title,
        "description": example.description,
        "difficulty": example.difficulty.label(),
    })
}

fn chapters(registry: &Registry) -> Vec<Value> {
    registry
        .examples_by_chapter()
        .into_iter()
        .map(|(chapter, examples)| {
            json!({
                "chapter": chapter,
                "heading": chapter_heading(chapter),
                "examples": examples.into_iter().map(example_link).collect::<Vec<_>>(),
            })
        })
        .collect()
}

fn categories(registry: &Registry) -> Vec<Value> {
    registry
        .categories()
        .iter()
        .map(|category| {
            json!({
                "id": category.id,
                "title": category.title,
                "description": category.description,
                "difficulty": category.difficulty,
                "examples": registry.members(category).map(example_link).collect::<Vec<_>>(),
            })
        })
        .collect()
}

/// Render `examples/<id>.md`.
pub fn render_example_doc(
    renderer: &TemplateRenderer,
    example: &ExampleDescriptor,
    sections: &[DocSection],
) -> Result<String> {
    let data = json!({
        "id": example.id,
        "title": example.title,
        "description": example.description,
        "concept": example.concept,
        "difficulty": example.difficulty.label(),
        "chapter": chapter_heading(&example.chapter),
        "contract_file": example.contract_file,
        "test_file": example.test_file,
        "learning_objectives": example.learning_objectives,
        "features": example.features,
        "use_case": example.use_case,
        "sections": sections,
    });
    renderer.render(embedded::DOCS_EXAMPLE, &data)
}

/// Render the GitBook navigation manifest (`SUMMARY.md`).
pub fn render_summary(renderer: &TemplateRenderer, registry: &Registry) -> Result<String> {
    let data = json!({
        "chapters": chapters(registry),
        "categories": categories(registry),
    });
    renderer.render(embedded::DOCS_SUMMARY, &data)
}

/// Render the documentation overview page (`README.md`).
pub fn render_readme(renderer: &TemplateRenderer, registry: &Registry) -> Result<String> {
    let chapters = chapters(registry);
    let data = json!({
        "example_count": registry.examples().len(),
        "chapter_count": chapters.len(),
        "category_count": registry.categories().len(),
        "chapters": chapters,
        "categories": categories(registry),
    });
    renderer.render(embedded::DOCS_README, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::{category, example};

    fn registry() -> Registry {
        Registry::new(
            vec![
                example("a", "basic"),
                example("b", "access-control"),
                example("c", "basic"),
            ],
            vec![category("mix", "Mixed", &["c", "ghost", "a"])],
        )
        .unwrap()
    }

    #[test]
    fn test_chapter_heading() {
        assert_eq!(chapter_heading("basic"), "Basic");
        assert_eq!(chapter_heading("access-control"), "Access Control");
        assert_eq!(chapter_heading("user_decryption"), "User Decryption");
        assert_eq!(chapter_heading(""), "");
    }

    #[test]
    fn test_example_doc_with_sections() {
        let renderer = TemplateRenderer::new();
        let sections = vec![DocSection {
            title: "Granting access".into(),
            body: "Uses FHE.allow.".into(),
            code: Some("await contract.grant(alice);".into()),
            chapter: "ignored".into(),
        }];
        let doc = render_example_doc(&renderer, &example("a", "basic"), &sections).unwrap();

        assert!(doc.starts_with("# Title a"));
        let order = [
            "## Overview",
            "## Concept",
            "## What You'll Learn",
            "## FHEVM Features Used",
            "## Code Examples",
            "### Granting access",
            "## Use Case",
            "## Next Steps",
        ];
        let positions: Vec<_> = order.iter().map(|h| doc.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(doc.contains("Uses FHE.allow."));
        assert!(doc.contains("```typescript\nawait contract.grant(alice);\n```"));
        assert!(doc.contains("- First objective"));
        assert!(doc.contains("- `FHE.add`"));
        assert!(!doc.contains("See the test file"));
    }

    #[test]
    fn test_example_doc_without_sections_points_to_test_file() {
        let renderer = TemplateRenderer::new();
        let doc = render_example_doc(&renderer, &example("a", "basic"), &[]).unwrap();
        assert!(doc.contains("See the test file `Sample.ts`"));
        assert!(!doc.contains("```typescript"));
    }

    #[test]
    fn test_section_without_code_has_no_fence() {
        let renderer = TemplateRenderer::new();
        let sections = vec![DocSection {
            title: "Prose only".into(),
            body: "Just words.".into(),
            code: None,
            chapter: "basic".into(),
        }];
        let doc = render_example_doc(&renderer, &example("a", "basic"), &sections).unwrap();
        assert!(doc.contains("### Prose only"));
        assert!(!doc.contains("```typescript"));
    }

    #[test]
    fn test_summary_groups_by_registry_chapter() {
        let renderer = TemplateRenderer::new();
        let summary = render_summary(&renderer, &registry()).unwrap();

        assert!(summary.starts_with("# Summary"));
        assert!(summary.contains("* [Introduction](README.md)"));
        let basic = summary.find("## Basic").unwrap();
        let access = summary.find("## Access Control").unwrap();
        let a = summary.find("* [Title a](examples/a.md)").unwrap();
        let c = summary.find("* [Title c](examples/c.md)").unwrap();
        assert!(basic < a && a < c && c < access);
        assert!(summary.contains("* Category mix"));
        assert!(!summary.contains("ghost"));
    }

    #[test]
    fn test_readme_counts_and_tables() {
        let renderer = TemplateRenderer::new();
        let readme = render_readme(&renderer, &registry()).unwrap();
        assert!(readme.contains("**3** examples across **2** chapters"));
        assert!(readme.contains("**1** categories"));
        assert!(readme.contains("| [Title c](examples/c.md) | Beginner | Description of c |"));
        assert!(!readme.contains("ghost"));
    }

    #[test]
    fn test_builtin_registry_renders() {
        let renderer = TemplateRenderer::new();
        let registry = Registry::builtin();
        let summary = render_summary(&renderer, &registry).unwrap();
        for e in registry.examples() {
            assert!(summary.contains(&format!("(examples/{}.md)", e.id)));
            render_example_doc(&renderer, e, &[]).unwrap();
        }
        render_readme(&renderer, &registry).unwrap();
    }
}
