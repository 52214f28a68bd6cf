//! Companion Perl plugin updates.
//!
//! The plugin file is not parsed. Its `$VERSION` declaration and its
//! `date_updated` entry are found by pattern and replaced in place, leaving
//! every other byte alone.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use chrono::Utc;
use regex_lite::Regex;
use semver::Version;
use tracing::debug;

use crate::error::CompanionError;
use crate::fsutil::write_atomic;

static VERSION_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"our \$VERSION = ["'](\d+\.\d+\.\d+)["'];"#).expect("valid version regex")
});

static DATE_UPDATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"date_updated\s*=>\s*["']([^"']+)["']"#).expect("valid date regex")
});

/// A field that could not be located in the plugin file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPattern {
    Version,
    DateUpdated,
}

impl fmt::Display for MissingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingPattern::Version => write!(f, "version"),
            MissingPattern::DateUpdated => write!(f, "date_updated"),
        }
    }
}

/// Result of substituting the new version and date into plugin content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionUpdate {
    pub content: String,
    pub previous_version: Option<String>,
    pub previous_date: Option<String>,
    pub missing: Vec<MissingPattern>,
}

impl CompanionUpdate {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Today's date in UTC as `YYYY-MM-DD`.
pub fn today_utc() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Replace the first `$VERSION` declaration and the first `date_updated` entry.
///
/// A missing pattern is not an error: that field is left as found and
/// reported in [`CompanionUpdate::missing`].
pub fn update_companion(content: &str, version: &Version, today: &str) -> CompanionUpdate {
    let mut missing = Vec::new();

    let version_line = format!("our $VERSION = '{}';", version);
    let (content, previous_version) = replace_first(content, &VERSION_DECL, &version_line);
    if previous_version.is_none() {
        debug!("could not find $VERSION declaration in plugin file");
        missing.push(MissingPattern::Version);
    }

    let date_line = format!("date_updated    => '{}'", today);
    let (content, previous_date) = replace_first(&content, &DATE_UPDATED, &date_line);
    if previous_date.is_none() {
        debug!("could not find date_updated in plugin file");
        missing.push(MissingPattern::DateUpdated);
    }

    CompanionUpdate {
        content,
        previous_version,
        previous_date,
        missing,
    }
}

/// Splice `replacement` over the first match of `re`.
///
/// Returns the new text and the first capture group of the match, or the
/// original text and `None` when nothing matched.
fn replace_first(content: &str, re: &Regex, replacement: &str) -> (String, Option<String>) {
    let Some(caps) = re.captures(content) else {
        return (content.to_string(), None);
    };

    let Some(whole) = caps.get(0) else {
        return (content.to_string(), None);
    };
    let captured = caps.get(1).map(|m| m.as_str().to_string());

    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..whole.start()]);
    out.push_str(replacement);
    out.push_str(&content[whole.end()..]);

    (out, captured)
}

/// Read the plugin file.
pub fn read_companion(path: &Path) -> Result<String, CompanionError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CompanionError::NotFound(path.to_path_buf())
        } else {
            CompanionError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Overwrite the plugin file with `content`.
pub fn write_companion(path: &Path, content: &str) -> Result<(), CompanionError> {
    debug!(path = %path.display(), bytes = content.len(), "writing plugin file");
    write_atomic(path, content).map_err(|e| CompanionError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
