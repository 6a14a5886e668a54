use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use fhevm_examples_core::docs::DocsGenerator;

use crate::output;
use crate::AppContext;

/// Regenerate the GitBook documentation for every registered example.
pub fn run(ctx: &AppContext, output_dir: Option<PathBuf>) -> Result<ExitCode> {
    output::print_header("fhevm-examples generate-docs");
    let output_dir = output_dir.unwrap_or_else(|| ctx.config.docs_output_dir.clone());
    output::print_key_value("Output", &output_dir.display().to_string());
    output::print_key_value("Examples", &ctx.registry.examples().len().to_string());

    let report = DocsGenerator::new(&ctx.registry, &ctx.config).generate_all(&output_dir)?;

    let total = report.pages.len();
    for (i, (id, _, sections)) in report.pages.iter().enumerate() {
        output::print_step(i + 1, total, &format!("examples/{id}.md ({sections} sections)"));
    }

    output::print_success(&format!("Documentation written to {}", output_dir.display()));
    output::print_key_value("Overview", &report.readme.display().to_string());
    output::print_key_value("Navigation", &report.summary.display().to_string());

    Ok(ExitCode::SUCCESS)
}
