//! Unified error types for the fhevm-examples toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating examples or documentation.
#[derive(Error, Debug)]
pub enum FhevmExamplesError {
    // --- Registry ---

    /// The requested example id is not in the registry.
    #[error("unknown example: {id} (available: {})", .available.join(", "))]
    UnknownExample { id: String, available: Vec<String> },

    /// The requested category id is not in the registry.
    #[error("unknown category: {id} (available: {})", .available.join(", "))]
    UnknownCategory { id: String, available: Vec<String> },

    /// A loaded registry declares the same id twice.
    #[error("duplicate {kind} id in registry: {id}")]
    DuplicateId { kind: &'static str, id: String },

    // --- Configuration ---

    /// A configuration or registry file was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration or registry file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Scaffolding ---

    /// The base template directory is missing.
    #[error("base template directory not found: {0}")]
    TemplateNotFound(PathBuf),

    /// The generated `package.json` could not be parsed or is not a JSON object.
    #[error("failed to update manifest at {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FhevmExamplesError {
    /// Whether this error means the user asked for an id the registry doesn't know.
    pub fn is_unknown_id(&self) -> bool {
        matches!(
            self,
            Self::UnknownExample { .. } | Self::UnknownCategory { .. }
        )
    }
}

/// Alias for `Result<T, FhevmExamplesError>`.
pub type Result<T> = std::result::Result<T, FhevmExamplesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_example_lists_available_ids() {
        let err = FhevmExamplesError::UnknownExample {
            id: "nope".into(),
            available: vec!["access-control".into(), "blind-auction".into()],
        };
        assert_eq!(
            err.to_string(),
            "unknown example: nope (available: access-control, blind-auction)"
        );
        assert!(err.is_unknown_id());
    }

    #[test]
    fn test_io_is_not_unknown_id() {
        let err: FhevmExamplesError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_unknown_id());
    }
}
