//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const PLUGIN_SOURCE: &str = r#"package My::Plugin;

use strict;
use warnings;

our $VERSION = '1.2.3';

sub meta {
    return {
        name            => 'My Plugin',
        date_updated    => '2020-01-01',
        author          => 'someone',
    };
}

1;
"#;

pub const MANIFEST_SOURCE: &str = r#"{
  "name": "my-plugin",
  "version": "1.2.3",
  "plugin": {
    "pm_path": "plugin.pl"
  },
  "scripts": {
    "bump": "pmbump"
  }
}
"#;

/// A throwaway project directory with a manifest and plugin file.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    /// Project with the standard manifest and plugin file.
    pub fn new() -> Self {
        Self::with_files(MANIFEST_SOURCE, Some(PLUGIN_SOURCE))
    }

    pub fn with_files(manifest: &str, plugin: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        fs::write(dir.path().join("package.json"), manifest).expect("Failed to write manifest");
        if let Some(plugin) = plugin {
            fs::write(dir.path().join("plugin.pl"), plugin).expect("Failed to write plugin");
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("package.json")
    }

    pub fn plugin_path(&self) -> PathBuf {
        self.dir.path().join("plugin.pl")
    }

    pub fn read_manifest(&self) -> String {
        read(&self.manifest_path())
    }

    pub fn read_plugin(&self) -> String {
        read(&self.plugin_path())
    }

    pub fn manifest_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_manifest()).expect("Manifest is not valid JSON")
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}
