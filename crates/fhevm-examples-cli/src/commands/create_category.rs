use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use fhevm_examples_core::category::CategoryGenerator;
use fhevm_examples_core::error::FhevmExamplesError;

use crate::commands::list;
use crate::output;
use crate::AppContext;

/// Generate every example of a category side by side, plus a category README.
///
/// Without an id, prints usage and the available categories. Examples are
/// generated in declared order; a failure partway leaves earlier ones on disk.
pub fn run(
    ctx: &AppContext,
    category_id: Option<&str>,
    output_dir: Option<PathBuf>,
) -> Result<ExitCode> {
    let Some(category_id) = category_id else {
        println!("Usage: fhevm-examples create-category <CATEGORY_ID> [OUTPUT_DIR]");
        list::print_categories(&ctx.registry);
        return Ok(ExitCode::SUCCESS);
    };

    output::print_header(&format!("fhevm-examples create-category: {category_id}"));
    let output_dir = output_dir.unwrap_or_else(|| ctx.config.default_output_dir.clone());

    let generator = CategoryGenerator::new(&ctx.registry, &ctx.config);
    let result = generator.generate_with(category_id, &output_dir, |step, total, example| {
        output::print_step(step, total, &format!("Generated example-{}", example.id));
    });
    let generated = match result {
        Ok(generated) => generated,
        Err(e @ FhevmExamplesError::UnknownCategory { .. }) => {
            output::print_error(&e.to_string());
            list::print_categories(&ctx.registry);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let missing = generated
        .examples
        .iter()
        .filter(|e| e.contract.is_none() || e.test.is_none())
        .count();
    if missing > 0 {
        output::print_warning(&format!(
            "{missing} example(s) are missing a contract or test source"
        ));
    }

    output::print_success(&format!(
        "Category '{category_id}' created with {} examples at {}",
        generated.examples.len(),
        generated.path.display()
    ));
    println!();
    println!("  Next steps:");
    println!("    cd {}", generated.path.display());
    println!("    cat README.md");
    println!();

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::context;

    #[test]
    fn test_missing_id_lists_and_succeeds() {
        let (_root, ctx) = context();
        assert_eq!(run(&ctx, None, None).unwrap(), ExitCode::SUCCESS);
        assert!(!ctx.config.default_output_dir.exists());
    }

    #[test]
    fn test_unknown_category_fails_without_output() {
        let (root, ctx) = context();
        let out = root.path().join("custom");
        assert_eq!(
            run(&ctx, Some("nope"), Some(out.clone())).unwrap(),
            ExitCode::FAILURE
        );
        assert!(!out.exists());
    }

    #[test]
    fn test_unknown_member_propagates_and_keeps_earlier_examples() {
        let (_root, ctx) = context();
        let err = run(&ctx, Some("broken"), None).unwrap_err();
        let err = err.downcast_ref::<FhevmExamplesError>().unwrap();
        assert!(matches!(err, FhevmExamplesError::UnknownExample { id, .. } if id == "missing"));

        let category_dir = ctx.config.default_output_dir.join("category-broken");
        assert!(category_dir.join("example-a").is_dir());
        assert!(!category_dir.join("README.md").exists());
    }

    #[test]
    fn test_known_category_generates_members() {
        let (_root, ctx) = context();
        assert_eq!(run(&ctx, Some("pair"), None).unwrap(), ExitCode::SUCCESS);
        let category_dir = ctx.config.default_output_dir.join("category-pair");
        assert!(category_dir.join("example-a/contracts/Sample.sol").is_file());
        assert!(category_dir.join("example-b/contracts/Sample.sol").is_file());
        assert!(category_dir.join("README.md").is_file());
    }
}
