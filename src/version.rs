use std::fmt;

use tracing::{debug, warn};

use crate::domain::{BranchKind, RawVersion, Stage};
use crate::error::{CiSemverError, Result};

/// A semantic version derived from a CI build version and branch.
///
/// Renders as `MAJOR.MINOR.PATCH[-stage][+build.N]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedVersion {
    pub raw: RawVersion,
    pub branch: BranchKind,
    pub stage: Option<Stage>,
    pub include_build_metadata: bool,
}

impl DerivedVersion {
    /// Derives the version for a raw build version and branch name.
    ///
    /// # Arguments
    /// * `raw_version` - Four-component build version (e.g. "3.0.0.11")
    /// * `branch` - Source-control branch name, compared case-insensitively
    /// * `include_build_metadata` - Whether to append `+build.N`
    ///
    /// # Returns
    /// * `Ok(DerivedVersion)` - The derived version
    /// * `Err(CiSemverError::InvalidInput)` - If either input is empty or the version is malformed
    pub fn derive(raw_version: &str, branch: &str, include_build_metadata: bool) -> Result<Self> {
        let raw = RawVersion::parse(raw_version)?;
        let branch = BranchKind::classify(branch)?;
        let stage = Stage::for_branch(&branch, raw.build);

        Ok(DerivedVersion {
            raw,
            branch,
            stage,
            include_build_metadata,
        })
    }

    /// The same version without build metadata, as compared against package feeds
    pub fn without_build_metadata(&self) -> Self {
        DerivedVersion {
            include_build_metadata: false,
            ..self.clone()
        }
    }

    /// Parse the rendered version with the `semver` crate.
    ///
    /// Fails for results that are valid for the CI server but not strict
    /// SemVer 2.0.0, such as stages containing `_` or numeric identifiers
    /// with leading zeros.
    pub fn to_semver(&self) -> Result<semver::Version> {
        let rendered = self.to_string();
        semver::Version::parse(&rendered).map_err(|e| {
            CiSemverError::invalid_input(format!(
                "'{}' is not a strict semantic version: {}",
                rendered, e
            ))
        })
    }

    /// Render the version, warning when the result is not strict SemVer 2.0.0
    pub fn render(&self) -> String {
        if let Err(e) = self.to_semver() {
            warn!("{}", e);
        }
        self.to_string()
    }
}

impl fmt::Display for DerivedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw.core())?;
        if let Some(stage) = &self.stage {
            write!(f, "-{}", stage)?;
        }
        if self.include_build_metadata {
            write!(f, "+build.{}", self.raw.build)?;
        }
        Ok(())
    }
}

/// Derives a semantic version string from a raw build version and branch.
///
/// | branch              | result for "3.0.0.11"            |
/// |---------------------|----------------------------------|
/// | `master`            | `3.0.0+build.11`                 |
/// | `test`              | `3.0.0-test.11+build.11`         |
/// | `dev`               | `3.0.0-pre.11+build.11`          |
/// | `feature/ABC-1`     | `3.0.0-dev.abc-1.11+build.11`    |
///
/// Pass `include_build_metadata = false` to get the string used for
/// package-feed lookups.
pub fn derive_semver(raw_version: &str, branch: &str, include_build_metadata: bool) -> Result<String> {
    let derived = DerivedVersion::derive(raw_version, branch, include_build_metadata)?;
    let rendered = derived.render();
    debug!(raw_version, branch, version = %rendered, "derived version");

    Ok(rendered)
}
