//! Core library for the fhevm-examples toolkit.
//!
//! Generates standalone fhEVM example projects from a base Hardhat template and
//! builds GitBook documentation from annotated test files. Everything is driven by
//! an injected [`registry::Registry`] and a [`config::GeneratorConfig`]:
//!
//! - [`generator::ExampleGenerator`]: one example into `example-<id>/`
//! - [`category::CategoryGenerator`]: a category's examples into `category-<id>/`
//! - [`docs::DocsGenerator`]: `README.md`, `SUMMARY.md`, and `examples/<id>.md`
//!
//! All operations are synchronous filesystem transformations.

pub mod category;
pub mod config;
pub mod docs;
pub mod error;
pub mod generator;
pub mod project;
pub mod registry;
pub mod templates;
