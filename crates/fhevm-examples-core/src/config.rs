//! Generator configuration (`fhevm-examples.config.json`).
//!
//! Every field has a default, so the file is optional. Relative paths are
//! resolved against the directory containing the config file (or the current
//! directory when running on defaults).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FhevmExamplesError, Result};

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE: &str = "fhevm-examples.config.json";

/// Paths and switches shared by the example, category, and docs generators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Hardhat project cloned into every generated example.
    pub base_template: PathBuf,
    /// Root holding one `<example-id>/` folder with the contract and test sources.
    pub examples_source: PathBuf,
    /// README template with `{{TOKEN}}` placeholders. Uses the embedded one when unset.
    pub readme_template: Option<PathBuf>,
    /// Where `create-example` / `create-category` write when no output dir is given.
    pub default_output_dir: PathBuf,
    /// Where `generate-docs` writes when no output dir is given.
    pub docs_output_dir: PathBuf,
    /// Remove an existing destination before copying the base template.
    pub clean: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_template: PathBuf::from("fhevm-hardhat-template"),
            examples_source: PathBuf::from("examples"),
            readme_template: None,
            default_output_dir: PathBuf::from("output"),
            docs_output_dir: PathBuf::from("docs"),
            clean: false,
        }
    }
}

impl GeneratorConfig {
    /// Load a config file, resolving relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| FhevmExamplesError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| FhevmExamplesError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let base = path.parent().unwrap_or(Path::new("."));
        Ok(config.resolved_against(base))
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Prefix every relative path with `base`.
    pub fn resolved_against(mut self, base: &Path) -> Self {
        let resolve = |p: &Path| {
            if p.is_absolute() || base.as_os_str().is_empty() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };
        self.base_template = resolve(&self.base_template);
        self.examples_source = resolve(&self.examples_source);
        self.readme_template = self.readme_template.as_deref().map(resolve);
        self.default_output_dir = resolve(&self.default_output_dir);
        self.docs_output_dir = resolve(&self.docs_output_dir);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = GeneratorConfig {
            base_template: dir.path().join("base"),
            examples_source: dir.path().join("src"),
            readme_template: Some(dir.path().join("README.tmpl")),
            default_output_dir: dir.path().join("out"),
            docs_output_dir: dir.path().join("docs"),
            clean: true,
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = GeneratorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "base_template": "template", "clean": true }"#).unwrap();

        let loaded = GeneratorConfig::load(&path).unwrap();
        assert_eq!(loaded.base_template, dir.path().join("template"));
        assert_eq!(loaded.examples_source, dir.path().join("examples"));
        assert!(loaded.readme_template.is_none());
        assert!(loaded.clean);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let loaded =
            GeneratorConfig::load_or_default(Path::new("/tmp/nonexistent_fhevm_examples.json"))
                .unwrap();
        assert_eq!(loaded, GeneratorConfig::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            GeneratorConfig::load(&path),
            Err(FhevmExamplesError::ConfigParse { .. })
        ));
    }
}
