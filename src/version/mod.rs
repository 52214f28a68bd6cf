//! Version parsing and semver bumping.

pub mod bump;

pub use bump::{BumpType, apply_bump, describe_bump, parse_version};
