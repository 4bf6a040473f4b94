use crate::error::{CiSemverError, Result};

/// Classification of a source-control branch for versioning purposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchKind {
    /// Stable release branch, no pre-release stage
    Master,
    /// Test branch, versioned as `test.{build}`
    Test,
    /// Integration branch, versioned as `pre.{build}`
    Dev,
    /// Any other branch; holds the segment used in `dev.{tail}.{build}`
    Other(String),
}

impl BranchKind {
    /// Classify a branch name.
    ///
    /// The name is trimmed and lowercased before matching. Exact matches on
    /// `master`, `test` and `dev` win; everything else falls back to
    /// [`BranchKind::Other`] with the last non-empty `/` segment as tail.
    pub fn classify(branch: &str) -> Result<Self> {
        let normalized = branch.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CiSemverError::invalid_input("branch is empty"));
        }

        let kind = match normalized.as_str() {
            "master" => BranchKind::Master,
            "test" => BranchKind::Test,
            "dev" => BranchKind::Dev,
            _ => BranchKind::Other(branch_tail(&normalized).to_string()),
        };

        Ok(kind)
    }

    /// Check if this is the stable release branch
    pub fn is_release_branch(&self) -> bool {
        matches!(self, BranchKind::Master)
    }
}

/// Last non-empty `/` segment of a branch name.
///
/// Single-segment names are returned whole. Names with no non-empty segment
/// at all (e.g. "/" or "//") also fall back to the whole name.
fn branch_tail(branch: &str) -> &str {
    if !branch.contains('/') {
        return branch;
    }

    branch
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(branch)
}
