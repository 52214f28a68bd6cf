//! pmbump - A CLI tool that bumps a semver version across a package manifest
//! and its companion Perl plugin file.
//!
//! # Overview
//!
//! pmbump reads `version` from package.json, bumps it by major, minor or patch,
//! records the old value as `previous_version`, and rewrites the `$VERSION`
//! declaration and `date_updated` entry in the plugin file named by
//! `plugin.pm_path`.

pub mod bump;
pub mod companion;
pub mod error;
pub mod fsutil;
pub mod manifest;
pub mod version;

// Re-export commonly used types
pub use bump::{BumpConfig, BumpSummary, run_bump};
pub use companion::{CompanionUpdate, MissingPattern};
pub use error::{BumpError, CompanionError, ManifestError, VersionError};
pub use manifest::Manifest;
pub use version::BumpType;
