//! Workflow orchestration
//!
//! Resolves inputs (explicit arguments, then CI environment variables, then
//! the local Git checkout) and feeds them to the pure derivation core. The
//! argument structs mirror the CLI but do not depend on clap, so the workflows
//! can be called programmatically.

use std::env;

use tracing::debug;

use crate::config::{Config, EnvironmentConfig};
use crate::error::{CiSemverError, Result};
use crate::feed::{check_package, PackageCheck, PackageFeed};
use crate::git_ops::GitRepo;
use crate::publish::{publish_permissive, BuildVersionPublisher};
use crate::version::DerivedVersion;

/// Arguments for the derive workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeriveArgs {
    /// Raw build version; falls back to the configured environment variable
    pub raw_version: Option<String>,

    /// Branch name; falls back to the environment, then the Git checkout
    pub branch: Option<String>,

    /// Overrides `versioning.include_build_metadata` when set
    pub include_build_metadata: Option<bool>,

    /// Record the result as the build's display version
    pub publish: bool,
}

/// Result of the derive workflow
#[derive(Debug, Clone, PartialEq)]
pub struct DeriveOutcome {
    pub derived: DerivedVersion,

    /// Rendered version string
    pub version: String,

    /// `None` when publishing was not requested
    pub published: Option<bool>,
}

/// Arguments for the package existence check
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckPackageArgs {
    pub package_id: String,
    pub raw_version: Option<String>,
    pub branch: Option<String>,
}

/// Derive the version for the current build and optionally publish it.
///
/// A failed publish is reported in the outcome and never fails the workflow.
pub fn run_derive(
    args: &DeriveArgs,
    config: &Config,
    publisher: &dyn BuildVersionPublisher,
) -> Result<DeriveOutcome> {
    let raw_version = resolve_raw_version(args.raw_version.as_deref(), &config.environment)?;
    let branch = resolve_branch(args.branch.as_deref(), &config.environment)?;
    let include_build_metadata = args
        .include_build_metadata
        .unwrap_or(config.versioning.include_build_metadata);

    let derived = DerivedVersion::derive(&raw_version, &branch, include_build_metadata)?;
    let version = derived.render();

    let published = if args.publish {
        Some(publish_permissive(publisher, &version))
    } else {
        None
    };

    Ok(DeriveOutcome {
        derived,
        version,
        published,
    })
}

/// Check whether the version for the current build already exists in a feed.
pub fn run_check_package(
    args: &CheckPackageArgs,
    config: &Config,
    feed: &dyn PackageFeed,
) -> Result<PackageCheck> {
    let raw_version = resolve_raw_version(args.raw_version.as_deref(), &config.environment)?;
    let branch = resolve_branch(args.branch.as_deref(), &config.environment)?;

    check_package(feed, &args.package_id, &raw_version, &branch)
}

/// Resolve the raw version: explicit value, else the configured environment variable.
pub fn resolve_raw_version(explicit: Option<&str>, env_config: &EnvironmentConfig) -> Result<String> {
    if let Some(value) = non_empty(explicit) {
        return Ok(value);
    }

    if let Some(value) = env_value(&env_config.version_var) {
        debug!(var = %env_config.version_var, "raw version taken from environment");
        return Ok(value);
    }

    Err(CiSemverError::invalid_input(format!(
        "raw version not given and {} is not set",
        env_config.version_var
    )))
}

/// Resolve the branch: explicit value, else the configured environment
/// variable, else the branch checked out in the current directory.
pub fn resolve_branch(explicit: Option<&str>, env_config: &EnvironmentConfig) -> Result<String> {
    if let Some(value) = non_empty(explicit) {
        return Ok(value);
    }

    if let Some(value) = env_value(&env_config.branch_var) {
        debug!(var = %env_config.branch_var, "branch taken from environment");
        return Ok(value);
    }

    // Not being inside a repository just means there is no fallback.
    let from_git = GitRepo::discover(".")
        .ok()
        .and_then(|repo| repo.current_branch().ok().flatten());
    if let Some(branch) = from_git {
        debug!(branch = %branch, "branch taken from git checkout");
        return Ok(branch);
    }

    Err(CiSemverError::invalid_input(format!(
        "branch not given, {} is not set and no branch is checked out",
        env_config.branch_var
    )))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn env_value(name: &str) -> Option<String> {
    non_empty(env::var(name).ok().as_deref())
}
