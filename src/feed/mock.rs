use std::collections::HashSet;

use crate::error::Result;
use crate::feed::PackageFeed;

/// In-memory package feed
///
/// Useful for tests and for callers that already hold the list of published
/// versions (e.g. from a previous API response).
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeed {
    packages: HashSet<(String, String)>,
}

impl InMemoryFeed {
    /// Create an empty feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a published package version (builder style)
    pub fn with_package(mut self, package_id: &str, version: &str) -> Self {
        self.add_package(package_id, version);
        self
    }

    /// Add a published package version
    pub fn add_package(&mut self, package_id: &str, version: &str) {
        self.packages
            .insert((package_id.to_lowercase(), version.to_lowercase()));
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageFeed for InMemoryFeed {
    fn has_version(&self, package_id: &str, version: &str) -> Result<bool> {
        Ok(self
            .packages
            .contains(&(package_id.to_lowercase(), version.to_lowercase())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_feed() {
        let feed = InMemoryFeed::new();
        assert!(feed.is_empty());
        assert!(!feed.has_version("Acme.Core", "1.0.0").unwrap());
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let feed = InMemoryFeed::new().with_package("Acme.Core", "1.0.0-Pre.3");
        assert_eq!(feed.len(), 1);
        assert!(feed.has_version("ACME.CORE", "1.0.0-pre.3").unwrap());
    }

    #[test]
    fn test_duplicate_packages_collapse() {
        let mut feed = InMemoryFeed::new();
        feed.add_package("a", "1.0.0");
        feed.add_package("A", "1.0.0");
        assert_eq!(feed.len(), 1);
    }
}
