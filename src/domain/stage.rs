//! Pre-release stage derived from the branch and build number
//!
//! The stage is the part after `-` in a version like `3.0.0-pre.11`.
//! See https://semver.org/#spec-item-9

use crate::domain::BranchKind;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Characters allowed in a stage; anything else is collapsed into `-`
const DISALLOWED_STAGE_CHARS: &str = r"[^A-Za-z0-9\-_.]+";

/// Sanitized pre-release stage identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage(String);

impl Stage {
    /// Build the stage for a branch, or `None` for the release branch
    ///
    /// # Examples
    /// ```ignore
    /// let stage = Stage::for_branch(&BranchKind::Dev, 11);
    /// assert_eq!(stage.map(|s| s.to_string()), Some("pre.11".to_string()));
    /// ```
    pub fn for_branch(branch: &BranchKind, build: u32) -> Option<Self> {
        let raw = match branch {
            BranchKind::Master => return None,
            BranchKind::Test => format!("test.{}", build),
            BranchKind::Dev => format!("pre.{}", build),
            BranchKind::Other(tail) => format!("dev.{}.{}", tail, build),
        };

        let stage = sanitize(&raw);
        if stage.is_empty() {
            return None;
        }

        Some(Stage(stage))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn disallowed_stage_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(DISALLOWED_STAGE_CHARS).expect("stage character class is a valid regex")
    })
}

/// Replace every run of characters outside `[A-Za-z0-9\-_.]` with a single `-`
pub fn sanitize(stage: &str) -> String {
    disallowed_stage_chars()
        .replace_all(stage, "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_has_no_stage() {
        assert_eq!(Stage::for_branch(&BranchKind::Master, 10), None);
    }

    #[test]
    fn test_test_stage() {
        let stage = Stage::for_branch(&BranchKind::Test, 7).unwrap();
        assert_eq!(stage.as_str(), "test.7");
    }

    #[test]
    fn test_dev_stage() {
        let stage = Stage::for_branch(&BranchKind::Dev, 11).unwrap();
        assert_eq!(stage.to_string(), "pre.11");
    }

    #[test]
    fn test_other_branch_stage() {
        let branch = BranchKind::Other("yyy-123-an-amazing-feature".to_string());
        let stage = Stage::for_branch(&branch, 12).unwrap();
        assert_eq!(stage.as_str(), "dev.yyy-123-an-amazing-feature.12");
    }

    #[test]
    fn test_sanitize_collapses_runs() {
        assert_eq!(sanitize("dev.foo  bar!!baz.1"), "dev.foo-bar-baz.1");
    }

    #[test]
    fn test_sanitize_keeps_allowed_characters() {
        assert_eq!(sanitize("dev.A_b-C.9"), "dev.A_b-C.9");
    }

    #[test]
    fn test_sanitize_replaces_non_ascii() {
        assert_eq!(sanitize("dev.café.3"), "dev.caf-.3");
        assert_eq!(sanitize("dev.üñï.3"), "dev.-.3");
    }

    #[test]
    fn test_sanitize_repeated_calls_agree() {
        let first = sanitize("dev.a b.1");
        for _ in 0..3 {
            assert_eq!(sanitize("dev.a b.1"), first);
        }
        assert_eq!(first, "dev.a-b.1");
    }

    #[test]
    fn test_slash_only_branch_stage() {
        let branch = BranchKind::Other("/".to_string());
        let stage = Stage::for_branch(&branch, 5).unwrap();
        assert_eq!(stage.as_str(), "dev.-.5");
    }
}
