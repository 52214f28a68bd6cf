//! Error types for pmbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from version parsing and bumping.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid version '{0}': expected MAJOR.MINOR.PATCH with numeric components")]
    Format(String),

    #[error("Invalid bump type '{0}'. Please specify version bump type: major, minor, or patch")]
    InvalidBumpType(String),

    #[error("Cannot bump {component} of version {version}: component would overflow")]
    Overflow {
        version: String,
        component: &'static str,
    },
}

/// Errors from loading or saving the manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read manifest {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Manifest is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write manifest {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from reading or writing the companion plugin file.
#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("Plugin file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read plugin file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write plugin file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the bump pipeline.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(
        "Plugin file not found: {}. The manifest was already updated to {new_version}; \
         the plugin file was left untouched.",
        path.display()
    )]
    CompanionNotFound { path: PathBuf, new_version: String },

    #[error(transparent)]
    Companion(#[from] CompanionError),
}
