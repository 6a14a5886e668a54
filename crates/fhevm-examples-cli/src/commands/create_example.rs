use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use fhevm_examples_core::generator::ExampleGenerator;

use crate::commands::list;
use crate::output;
use crate::AppContext;

/// Generate one standalone example project.
///
/// Without an id, prints usage and the available examples. An unknown id
/// prints the same listing and exits non-zero without touching the output
/// directory.
pub fn run(
    ctx: &AppContext,
    example_id: Option<&str>,
    output_dir: Option<PathBuf>,
) -> Result<ExitCode> {
    let Some(example_id) = example_id else {
        println!("Usage: fhevm-examples create-example <EXAMPLE_ID> [OUTPUT_DIR]");
        list::print_examples(&ctx.registry);
        return Ok(ExitCode::SUCCESS);
    };

    output::print_header(&format!("fhevm-examples create-example: {example_id}"));
    let output_dir = output_dir.unwrap_or_else(|| ctx.config.default_output_dir.clone());

    let generator = ExampleGenerator::new(&ctx.registry, &ctx.config);
    let generated = match generator.generate(example_id, &output_dir) {
        Ok(generated) => generated,
        Err(e) if e.is_unknown_id() => {
            output::print_error(&format!("Unknown example: {example_id}"));
            list::print_examples(&ctx.registry);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    match &generated.contract {
        Some(path) => output::print_key_value("Contract", &path.display().to_string()),
        None => output::print_warning("Contract source not found, left out"),
    }
    match &generated.test {
        Some(path) => output::print_key_value("Test", &path.display().to_string()),
        None => output::print_warning("Test source not found, left out"),
    }
    if !generated.manifest_updated {
        output::print_warning("No package.json in the base template, manifest not updated");
    }

    output::print_success(&format!(
        "Example '{example_id}' created at {}",
        generated.path.display()
    ));
    println!();
    println!("  Next steps:");
    println!("    cd {}", generated.path.display());
    println!("    npm install");
    println!("    npx hardhat test");
    println!();

    Ok(ExitCode::SUCCESS)
}
