//! Strict version parsing and bump calculation.

use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::error::VersionError;

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Patch => "patch",
            BumpType::Minor => "minor",
            BumpType::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpType {
    type Err = VersionError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(BumpType::Major),
            "minor" => Ok(BumpType::Minor),
            "patch" => Ok(BumpType::Patch),
            other => Err(VersionError::InvalidBumpType(other.to_string())),
        }
    }
}

/// Parse a plain `MAJOR.MINOR.PATCH` version.
///
/// Unlike `Version::parse`, this rejects pre-release and build suffixes, a
/// leading `v`, surrounding whitespace, and anything with fewer or more than
/// three numeric components.
pub fn parse_version(raw: &str) -> Result<Version, VersionError> {
    let format_error = || VersionError::Format(raw.to_string());

    let mut parts = raw.split('.');
    let mut next_component = || -> Result<u64, VersionError> {
        let part = parts.next().ok_or_else(format_error)?;
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(format_error());
        }
        part.parse::<u64>().map_err(|_| format_error())
    };

    let major = next_component()?;
    let minor = next_component()?;
    let patch = next_component()?;

    if parts.next().is_some() {
        return Err(format_error());
    }

    Ok(Version::new(major, minor, patch))
}

/// Apply a bump to a version.
///
/// - major: increment major, reset minor and patch
/// - minor: increment minor, reset patch
/// - patch: increment patch
pub fn apply_bump(base: &Version, bump: BumpType) -> Result<Version, VersionError> {
    let overflow = |component| VersionError::Overflow {
        version: base.to_string(),
        component,
    };

    let next = match bump {
        BumpType::Major => {
            let major = base.major.checked_add(1).ok_or_else(|| overflow("major"))?;
            Version::new(major, 0, 0)
        }
        BumpType::Minor => {
            let minor = base.minor.checked_add(1).ok_or_else(|| overflow("minor"))?;
            Version::new(base.major, minor, 0)
        }
        BumpType::Patch => {
            let patch = base.patch.checked_add(1).ok_or_else(|| overflow("patch"))?;
            Version::new(base.major, base.minor, patch)
        }
    };

    Ok(next)
}

/// Human-readable explanation of what a bump does.
pub fn describe_bump(bump: BumpType) -> &'static str {
    match bump {
        BumpType::Major => "Major version bump: incrementing major, resetting minor and patch",
        BumpType::Minor => "Minor version bump: incrementing minor, resetting patch",
        BumpType::Patch => "Patch version bump: incrementing patch",
    }
}
