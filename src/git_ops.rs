use std::path::Path;

use git2::Repository;

use crate::error::Result;

/// Wrapper around git2 Repository used to fall back to the checked-out branch
/// when the CI server does not provide one.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discovers the git repository containing `path` (or one of its parents).
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If `path` is not inside a git repository
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Name of the branch HEAD points to.
    ///
    /// # Returns
    /// * `Ok(Some(name))` - HEAD is on a branch (also for an unborn branch)
    /// * `Ok(None)` - HEAD is detached, as in most CI checkouts of a commit
    /// * `Err` - If HEAD cannot be read
    pub fn current_branch(&self) -> Result<Option<String>> {
        if self.repo.head_detached()? {
            return Ok(None);
        }

        let head = self.repo.find_reference("HEAD")?;
        let branch = head
            .symbolic_target()
            .and_then(|target| target.strip_prefix("refs/heads/"))
            .map(|name| name.to_string());

        Ok(branch)
    }
}
