//! Integration tests for version calculation.

use pmbump::error::VersionError;
use pmbump::version::{BumpType, apply_bump, parse_version};
use semver::Version;

const SAMPLES: &[(u64, u64, u64)] = &[
    (0, 0, 0),
    (0, 0, 9),
    (0, 9, 0),
    (1, 2, 3),
    (1, 5, 3),
    (9, 99, 999),
    (2024, 6, 30),
];

#[test]
fn test_major_bump_for_all_samples() {
    for &(major, minor, patch) in SAMPLES {
        let next = apply_bump(&Version::new(major, minor, patch), BumpType::Major).unwrap();
        assert_eq!(next, Version::new(major + 1, 0, 0));
    }
}

#[test]
fn test_minor_bump_for_all_samples() {
    for &(major, minor, patch) in SAMPLES {
        let next = apply_bump(&Version::new(major, minor, patch), BumpType::Minor).unwrap();
        assert_eq!(next, Version::new(major, minor + 1, 0));
    }
}

#[test]
fn test_patch_bump_for_all_samples() {
    for &(major, minor, patch) in SAMPLES {
        let next = apply_bump(&Version::new(major, minor, patch), BumpType::Patch).unwrap();
        assert_eq!(next, Version::new(major, minor, patch + 1));
    }
}

#[test]
fn test_parse_then_bump_from_manifest_string() {
    let current = parse_version("1.5.3").unwrap();
    let next = apply_bump(&current, BumpType::Minor).unwrap();

    // Minor bump resets patch
    assert_eq!(next.to_string(), "1.6.0");
}

#[test]
fn test_fewer_than_three_components_fails_fast() {
    // Missing components are never defaulted to zero
    for raw in ["1", "1.2", "1.2."] {
        let err = parse_version(raw).unwrap_err();
        assert!(matches!(err, VersionError::Format(ref s) if s == raw));
    }
}
