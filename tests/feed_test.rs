use std::fs;

use ci_semver::feed::{check_package, package_version_exists, InMemoryFeed, LocalFeed};
use ci_semver::DerivedVersion;
use tempfile::TempDir;

// ============================================================================
// In-memory feed
// ============================================================================

#[test]
fn test_existing_release_version() {
    let feed = InMemoryFeed::new().with_package("Acme.Core", "2.0.0");
    assert!(package_version_exists(&feed, "Acme.Core", "2.0.0.10", "master").unwrap());
}

#[test]
fn test_build_metadata_never_reaches_the_feed() {
    // A feed entry carrying metadata must not match; feeds store versions without it.
    let feed = InMemoryFeed::new().with_package("Acme.Core", "2.0.0+build.10");
    assert!(!package_version_exists(&feed, "Acme.Core", "2.0.0.10", "master").unwrap());
}

#[test]
fn test_new_build_number_is_not_published() {
    let feed = InMemoryFeed::new().with_package("Acme.Core", "3.0.0-pre.11");
    assert!(!package_version_exists(&feed, "Acme.Core", "3.0.0.12", "dev").unwrap());
}

#[test]
fn test_check_reports_derived_version() {
    let feed = InMemoryFeed::new();
    let check = check_package(&feed, " Acme.Core ", "4.0.1.12", "feature/YYY-123").unwrap();
    assert_eq!(check.package_id, "Acme.Core");
    assert_eq!(check.version, "4.0.1-dev.yyy-123.12");
    assert!(!check.exists);
}

#[test]
fn test_checked_version_matches_derivation_without_metadata() {
    let feed = InMemoryFeed::new();
    for branch in ["master", "test", "dev", "feature/ABC_1", "/"] {
        let expected = DerivedVersion::derive("2.3.4.56", branch, true)
            .unwrap()
            .without_build_metadata()
            .to_string();
        let check = check_package(&feed, "Acme.Core", "2.3.4.56", branch).unwrap();
        assert_eq!(check.version, expected);
        assert!(!check.version.contains('+'));
    }
}

#[test]
fn test_invalid_version_is_reported_before_lookup() {
    let feed = InMemoryFeed::new();
    let err = package_version_exists(&feed, "Acme.Core", "4.0", "dev").unwrap_err();
    assert!(err.is_invalid_input());
}

// ============================================================================
// Local folder feed
// ============================================================================

#[test]
fn test_local_feed_flat_layout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Acme.Core.1.4.2-test.7.nupkg"), b"").unwrap();
    fs::write(dir.path().join("Acme.Core.1.4.2-test.6.nupkg"), b"").unwrap();

    let feed = LocalFeed::open(dir.path()).unwrap();
    assert!(package_version_exists(&feed, "Acme.Core", "1.4.2.7", "test").unwrap());
    assert!(!package_version_exists(&feed, "Acme.Core", "1.4.2.8", "test").unwrap());
    assert!(!package_version_exists(&feed, "Acme.Other", "1.4.2.7", "test").unwrap());
}

#[test]
fn test_local_feed_hierarchical_layout() {
    let dir = TempDir::new().unwrap();
    let version_dir = dir.path().join("acme.core").join("5.0.0-dev.jira-9.3");
    fs::create_dir_all(&version_dir).unwrap();
    fs::write(version_dir.join("acme.core.5.0.0-dev.jira-9.3.nupkg"), b"").unwrap();

    let feed = LocalFeed::open(dir.path()).unwrap();
    assert!(package_version_exists(&feed, "Acme.Core", "5.0.0.3", "bugfix/JIRA-9").unwrap());
}

#[test]
fn test_local_feed_missing_directory() {
    let dir = TempDir::new().unwrap();
    let err = LocalFeed::open(dir.path().join("missing")).unwrap_err();
    assert!(err.to_string().starts_with("Package feed error"));
}
