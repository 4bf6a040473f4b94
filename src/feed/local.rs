use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CiSemverError, Result};
use crate::feed::PackageFeed;

/// NuGet folder feed on the local filesystem.
///
/// Both layouts NuGet writes are recognised:
/// - flat: `<root>/<id>.<version>.nupkg`
/// - hierarchical: `<root>/<id>/<version>/<id>.<version>.nupkg` (lowercase)
#[derive(Debug, Clone)]
pub struct LocalFeed {
    root: PathBuf,
}

impl LocalFeed {
    /// Open a folder feed; the directory must exist
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(CiSemverError::feed(format!(
                "Feed directory not found: {}",
                root.display()
            )));
        }

        Ok(LocalFeed {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn has_hierarchical(&self, id: &str, version: &str) -> bool {
        self.root
            .join(id)
            .join(version)
            .join(package_file_name(id, version))
            .is_file()
    }

    fn has_flat(&self, id: &str, version: &str) -> Result<bool> {
        let wanted = package_file_name(id, version);

        let entries = fs::read_dir(&self.root).map_err(|e| {
            CiSemverError::feed(format!(
                "Cannot read feed directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().to_lowercase() == wanted {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/// Ids and versions become path components, so they must not escape the feed root
fn validate_path_component(kind: &str, value: &str) -> Result<()> {
    if value.contains('/') || value.contains('\\') || value == "." || value == ".." {
        return Err(CiSemverError::invalid_input(format!(
            "{} '{}' must be a single path component",
            kind, value
        )));
    }
    Ok(())
}

fn package_file_name(id: &str, version: &str) -> String {
    format!("{}.{}.nupkg", id, version)
}

impl PackageFeed for LocalFeed {
    fn has_version(&self, package_id: &str, version: &str) -> Result<bool> {
        validate_path_component("package id", package_id)?;
        validate_path_component("version", version)?;

        let id = package_id.to_lowercase();
        let version = version.to_lowercase();

        if self.has_hierarchical(&id, &version) {
            return Ok(true);
        }

        self.has_flat(&id, &version)
    }
}
