pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod git_ops;
pub mod publish;
pub mod ui;
pub mod version;

pub use error::{CiSemverError, Result};
pub use version::{derive_semver, DerivedVersion};
