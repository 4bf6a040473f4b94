//! Publishing the derived version back to the CI server
//!
//! The derived version is recorded as the build's display version. Publishing
//! is fire-and-forget: callers use [publish_permissive] so a failing CI agent
//! command never fails the version derivation itself.

pub mod command;

pub use command::CommandPublisher;

use tracing::{info, warn};

use crate::error::Result;

/// Records a derived version as the build's display version
pub trait BuildVersionPublisher {
    /// Publish the version
    ///
    /// # Returns
    /// * `Ok(())` if the CI server accepted the version
    /// * `Err(CiSemverError::Publish)` otherwise
    fn publish(&self, version: &str) -> Result<()>;
}

/// Try to publish a version, logging errors but not failing
///
/// # Returns
/// `true` if the publish succeeded
pub fn publish_permissive<P: BuildVersionPublisher + ?Sized>(publisher: &P, version: &str) -> bool {
    match publisher.publish(version) {
        Ok(()) => {
            info!(version, "published build version");
            true
        }
        Err(e) => {
            warn!(version, error = %e, "could not publish build version");
            false
        }
    }
}
