//! Pure formatting functions for UI output.
//!
//! Everything here returns a `String`; printing lives in the parent module.

use console::style;

use crate::domain::BranchKind;
use crate::version::DerivedVersion;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), message)
}

/// Human readable description of how a branch is versioned
pub fn describe_branch(branch: &BranchKind) -> String {
    match branch {
        BranchKind::Master => "release branch (no pre-release stage)".to_string(),
        BranchKind::Test => "test branch".to_string(),
        BranchKind::Dev => "development branch".to_string(),
        BranchKind::Other(tail) => format!("topic branch '{}'", tail),
    }
}

/// Summary of a derivation, shown on stderr next to the plain result on stdout.
///
/// # Arguments
/// * `derived` - The derived version
pub fn format_derivation(derived: &DerivedVersion) -> String {
    let stage = derived
        .stage
        .as_ref()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());

    let channel = if derived.branch.is_release_branch() {
        "release"
    } else {
        "pre-release"
    };

    format!(
        "{}\n  Raw version: {}\n  Branch:      {}\n  Channel:     {}\n  Stage:       {}\n  Version:     {}",
        style("Derived version").bold(),
        derived.raw,
        describe_branch(&derived.branch),
        channel,
        stage,
        style(derived).green()
    )
}

/// One-line result of a package feed lookup
pub fn format_package_check(package_id: &str, version: &str, exists: bool) -> String {
    if exists {
        format!(
            "Package {} {} already exists in the feed",
            style(package_id).cyan(),
            version
        )
    } else {
        format!(
            "Package {} {} not found in the feed",
            style(package_id).cyan(),
            version
        )
    }
}
