//! Domain logic - pure versioning rules independent of CI and I/O

pub mod branch;
pub mod stage;
pub mod version;

pub use branch::BranchKind;
pub use stage::Stage;
pub use version::RawVersion;
