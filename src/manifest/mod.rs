//! package.json loading, version recording and rewriting.
//!
//! The manifest is kept as a generic JSON value so unknown fields survive the
//! rewrite untouched and in their original order.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ManifestError;
use crate::fsutil::write_atomic;

/// Default manifest location, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// The `plugin` section of the manifest.
#[derive(Debug, Deserialize)]
struct PluginSection {
    pm_path: String,
}

/// A loaded manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    data: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::NotFound(path.to_path_buf())
            } else {
                ManifestError::ReadFailed {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        Self::parse_str(path, &content)
    }

    /// Parse manifest `content` that was read from `path`.
    pub fn parse_str(path: &Path, content: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            reason: format!("Invalid JSON: {}", e),
        })?;

        match value {
            Value::Object(data) => {
                debug!(path = %path.display(), keys = data.len(), "loaded manifest");
                Ok(Self {
                    path: path.to_path_buf(),
                    data,
                })
            }
            _ => Err(ManifestError::Parse {
                path: path.to_path_buf(),
                reason: "top-level value is not an object".into(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw `version` string.
    pub fn version(&self) -> Result<&str, ManifestError> {
        self.data
            .get("version")
            .and_then(Value::as_str)
            .ok_or(ManifestError::MissingField("version"))
    }

    /// The `plugin.pm_path` value exactly as written in the manifest.
    pub fn pm_path(&self) -> Result<String, ManifestError> {
        let plugin = self
            .data
            .get("plugin")
            .ok_or(ManifestError::MissingField("plugin.pm_path"))?;

        PluginSection::deserialize(plugin)
            .map(|section| section.pm_path)
            .map_err(|_| ManifestError::MissingField("plugin.pm_path"))
    }

    /// Location of the companion plugin file.
    ///
    /// Relative paths resolve against the manifest's directory.
    pub fn companion_path(&self) -> Result<PathBuf, ManifestError> {
        let pm_path = PathBuf::from(self.pm_path()?);
        if pm_path.is_absolute() {
            return Ok(pm_path);
        }

        Ok(match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(pm_path),
            _ => pm_path,
        })
    }

    /// Store `previous` as `previous_version` and `new` as `version`.
    ///
    /// `previous_version` keeps its position when already present and is
    /// appended otherwise.
    pub fn record_bump(&mut self, previous: &str, new: &str) {
        self.data
            .insert("previous_version".into(), Value::String(previous.to_string()));
        self.data
            .insert("version".into(), Value::String(new.to_string()));
    }

    /// Serialize with 2-space indentation and a single trailing newline.
    pub fn render(&self) -> Result<String, ManifestError> {
        let output = serde_json::to_string_pretty(&self.data).map_err(ManifestError::Serialize)?;
        Ok(format!("{}\n", output))
    }

    /// Overwrite the manifest file.
    pub fn save(&self) -> Result<(), ManifestError> {
        let content = self.render()?;
        write_atomic(&self.path, &content).map_err(|e| ManifestError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}
