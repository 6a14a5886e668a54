use std::process::ExitCode;

use anyhow::Result;

use fhevm_examples_core::registry::Registry;

use crate::output;
use crate::AppContext;

/// Print every example as `id [difficulty] description`.
pub fn print_examples(registry: &Registry) {
    println!();
    println!("Available examples:");
    for e in registry.examples() {
        output::print_entry(&e.id, e.difficulty.as_str(), &e.description);
    }
    println!();
}

/// Print every category as `id [difficulty] description`.
pub fn print_categories(registry: &Registry) {
    println!();
    println!("Available categories:");
    for c in registry.categories() {
        output::print_entry(&c.id, &c.difficulty, &c.description);
    }
    println!();
}

/// List both registries and flag category members that don't resolve.
pub fn run(ctx: &AppContext) -> Result<ExitCode> {
    output::print_header("fhevm-examples list");
    print_examples(&ctx.registry);
    print_categories(&ctx.registry);

    for (category, member) in ctx.registry.unresolved_members() {
        output::print_warning(&format!(
            "category '{category}' lists unknown example '{member}'"
        ));
    }

    Ok(ExitCode::SUCCESS)
}
