//! User interface module - terminal output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Printing
//!
//! Standard output is reserved for machine-readable results so the binary can
//! be used in `$(...)` substitutions; every decorated line goes to stderr.

pub mod formatter;

use crate::version::DerivedVersion;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", formatter::format_error(message));
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{}", formatter::format_success(message));
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{}", formatter::format_status(message));
}

pub fn display_warning(message: &str) {
    eprintln!("{}", formatter::format_warning(message));
}

pub fn display_derivation(derived: &DerivedVersion) {
    eprintln!("{}", formatter::format_derivation(derived));
}

pub fn display_package_check(package_id: &str, version: &str, exists: bool) {
    eprintln!(
        "{}",
        formatter::format_package_check(package_id, version, exists)
    );
}

/// Print a plain result on stdout.
pub fn display_result(value: &str) {
    println!("{}", value);
}
