//! Package feed abstraction layer
//!
//! This module provides a trait-based abstraction over NuGet package feeds,
//! so the existence check can run against a real feed or an in-memory one.
//!
//! # Overview
//!
//! The primary abstraction is the [PackageFeed] trait. The implementations are:
//!
//! - [local::LocalFeed]: a folder feed on disk (flat or hierarchical layout)
//! - [mock::InMemoryFeed]: an in-memory feed for testing
//!
//! # Usage
//!
//! ```rust
//! # use ci_semver::feed::{package_version_exists, InMemoryFeed};
//! # fn example() -> ci_semver::Result<()> {
//! let feed = InMemoryFeed::new().with_package("Acme.Core", "3.0.0-pre.11");
//! assert!(package_version_exists(&feed, "Acme.Core", "3.0.0.11", "dev")?);
//! # Ok(())
//! # }
//! ```

pub mod local;
pub mod mock;

pub use local::LocalFeed;
pub use mock::InMemoryFeed;

use tracing::debug;

use crate::error::{CiSemverError, Result};
use crate::version::DerivedVersion;

/// Lookup of `(package id, version)` pairs in a package index
///
/// ## Matching
///
/// Implementations must compare both the package id and the version
/// case-insensitively, as NuGet does.
pub trait PackageFeed: Send + Sync {
    /// Check whether the feed contains exactly this package version
    ///
    /// # Arguments
    /// * `package_id` - NuGet package id (e.g., "Acme.Core")
    /// * `version` - Version string without build metadata (e.g., "3.0.0-pre.11")
    ///
    /// # Returns
    /// * `Ok(true)` - If the version is published
    /// * `Ok(false)` - If the package or version is absent
    /// * `Err` - If the feed cannot be queried
    fn has_version(&self, package_id: &str, version: &str) -> Result<bool>;
}

/// Result of looking up the version derived for a build in a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCheck {
    pub package_id: String,
    /// Feed-comparable version (no build metadata)
    pub version: String,
    pub exists: bool,
}

/// Looks up the version derived for this build in a feed.
///
/// The version is derived without build metadata, since feeds ignore it.
///
/// # Arguments
/// * `feed` - Feed to query
/// * `package_id` - NuGet package id
/// * `raw_version` - Four-component build version
/// * `branch` - Source-control branch
///
/// # Returns
/// * `Ok(PackageCheck)` - The derived version and whether the feed has it
/// * `Err(CiSemverError::InvalidInput)` - If the package id is empty or the version cannot be derived
/// * `Err` - If the feed cannot be queried
pub fn check_package<F: PackageFeed + ?Sized>(
    feed: &F,
    package_id: &str,
    raw_version: &str,
    branch: &str,
) -> Result<PackageCheck> {
    let package_id = package_id.trim();
    if package_id.is_empty() {
        return Err(CiSemverError::invalid_input("package id is required"));
    }

    let version = DerivedVersion::derive(raw_version, branch, true)?
        .without_build_metadata()
        .render();
    let exists = feed.has_version(package_id, &version)?;
    debug!(package_id, version = %version, exists, "checked package feed");

    Ok(PackageCheck {
        package_id: package_id.to_string(),
        version,
        exists,
    })
}

/// Checks whether the version derived for this build already exists in a feed.
pub fn package_version_exists<F: PackageFeed + ?Sized>(
    feed: &F,
    package_id: &str,
    raw_version: &str,
    branch: &str,
) -> Result<bool> {
    check_package(feed, package_id, raw_version, branch).map(|check| check.exists)
}
