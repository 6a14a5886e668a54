//! Filesystem helpers for scaffolding a generated example project.
//!
//! A generated example is a clone of the base Hardhat template with the
//! example's sources overlaid on top:
//!
//! ```text
//! example-<id>/
//! ├── contracts/<Contract>.sol   # overlaid from <examples_source>/<id>/
//! ├── test/<Contract>.ts         # overlaid from <examples_source>/<id>/
//! ├── README.md                  # rendered from the README template
//! ├── package.json               # name/description rewritten
//! └── ...                        # everything else copied from the template
//! ```

use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use crate::error::{FhevmExamplesError, Result};

/// Subdirectory receiving the overlaid contract.
pub const CONTRACTS_DIR: &str = "contracts";
/// Subdirectory receiving the overlaid test.
pub const TEST_DIR: &str = "test";
/// Manifest rewritten after copying.
pub const MANIFEST_FILE: &str = "package.json";
pub const README_FILE: &str = "README.md";

/// Recursively copy `src` into `dest`, creating directories as needed.
///
/// Copies everything, dotfiles and build output included. Existing files at
/// the destination are overwritten; files only present at the destination
/// are left alone.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<u64> {
    if !src.is_dir() {
        return Err(FhevmExamplesError::TemplateNotFound(src.to_path_buf()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| FhevmExamplesError::Other(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| FhevmExamplesError::Other(e.into()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    tracing::debug!("copied {copied} files from {} to {}", src.display(), dest.display());
    Ok(copied)
}

/// Remove `dir` and everything below it, if it exists.
pub fn clear_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        tracing::info!("removing existing {}", dir.display());
        std::fs::remove_dir_all(dir)?;
    }
    Ok(())
}

/// Delete the files directly inside `slot` so the template's own sample
/// contract or test doesn't ship next to the overlaid one. Subdirectories
/// are kept.
pub fn clear_slot(slot: &Path) -> Result<usize> {
    if !slot.is_dir() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in std::fs::read_dir(slot)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            tracing::debug!("removing template file {}", entry.path().display());
            std::fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Copy `source` into `dest_dir/<file name>` if it exists.
///
/// Returns the written path, or `None` (after logging a warning) when the
/// source is missing.
pub fn overlay_file(source: &Path, dest_dir: &Path) -> Result<Option<PathBuf>> {
    if !source.is_file() {
        tracing::warn!("source file not found, skipping: {}", source.display());
        return Ok(None);
    }

    let Some(file_name) = source.file_name() else {
        return Ok(None);
    };

    std::fs::create_dir_all(dest_dir)?;
    let target = dest_dir.join(file_name);
    std::fs::copy(source, &target)?;
    tracing::debug!("overlaid {} -> {}", source.display(), target.display());
    Ok(Some(target))
}

/// Rewrite `name` and `description` in a `package.json`, keeping every other
/// field and the key order.
///
/// Returns `false` (after logging a warning) when the manifest doesn't exist.
pub fn update_manifest(manifest_path: &Path, name: &str, description: &str) -> Result<bool> {
    if !manifest_path.is_file() {
        tracing::warn!("manifest not found, skipping: {}", manifest_path.display());
        return Ok(false);
    }

    let contents = std::fs::read_to_string(manifest_path)?;
    let mut manifest: Value =
        serde_json::from_str(&contents).map_err(|e| FhevmExamplesError::ManifestParse {
            path: manifest_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| FhevmExamplesError::ManifestParse {
            path: manifest_path.to_path_buf(),
            reason: "top-level value is not an object".into(),
        })?;
    fields.insert("name".into(), Value::String(name.into()));
    fields.insert("description".into(), Value::String(description.into()));

    let mut json =
        serde_json::to_string_pretty(&manifest).map_err(|e| FhevmExamplesError::ManifestParse {
            path: manifest_path.to_path_buf(),
            reason: e.to_string(),
        })?;
    json.push('\n');
    std::fs::write(manifest_path, json)?;
    Ok(true)
}
