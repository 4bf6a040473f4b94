use crate::error::{CiSemverError, Result};
use std::fmt;
use std::str::FromStr;

/// Four-component build version as produced by the CI server
/// (`MAJOR.MINOR.PATCH.BUILD`, e.g. "2.0.0.10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

impl RawVersion {
    /// Create a new raw version
    pub fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        RawVersion {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Parse a raw version string. Exactly four dot-separated non-negative
    /// integers are accepted; surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CiSemverError::invalid_input("raw version is empty"));
        }

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() != 4 {
            return Err(CiSemverError::invalid_input(format!(
                "Invalid version format: '{}' - expected MAJOR.MINOR.PATCH.BUILD",
                raw
            )));
        }

        let major = parse_component(parts[0], "major", raw)?;
        let minor = parse_component(parts[1], "minor", raw)?;
        let patch = parse_component(parts[2], "patch", raw)?;
        let build = parse_component(parts[3], "build", raw)?;

        Ok(RawVersion::new(major, minor, patch, build))
    }

    /// The `MAJOR.MINOR.PATCH` part of the version
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Largest component a .NET `System.Version` accepts
pub const MAX_COMPONENT: u32 = i32::MAX as u32;

// `u32::from_str` accepts a leading '+', so digits are checked first.
fn parse_component(part: &str, name: &str, raw: &str) -> Result<u32> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(CiSemverError::invalid_input(format!(
            "Invalid {} component '{}' in version '{}'",
            name, part, raw
        )));
    }

    part.parse::<u32>()
        .ok()
        .filter(|value| *value <= MAX_COMPONENT)
        .ok_or_else(|| {
            CiSemverError::invalid_input(format!(
                "{} component '{}' in version '{}' is out of range",
                name, part, raw
            ))
        })
}

impl FromStr for RawVersion {
    type Err = CiSemverError;

    fn from_str(s: &str) -> Result<Self> {
        RawVersion::parse(s)
    }
}

impl fmt::Display for RawVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}
