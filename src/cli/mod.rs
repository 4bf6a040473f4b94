//! CLI-facing workflows, decoupled from argument parsing

pub mod orchestration;

pub use orchestration::{
    resolve_branch, resolve_raw_version, run_check_package, run_derive, CheckPackageArgs,
    DeriveArgs, DeriveOutcome,
};
