use thiserror::Error;

/// Unified error type for ci-semver operations
#[derive(Error, Debug)]
pub enum CiSemverError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Package feed error: {0}")]
    Feed(String),

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in ci-semver
pub type Result<T> = std::result::Result<T, CiSemverError>;

impl CiSemverError {
    /// Create an invalid input error with context
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CiSemverError::InvalidInput(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CiSemverError::Config(msg.into())
    }

    /// Create a package feed error with context
    pub fn feed(msg: impl Into<String>) -> Self {
        CiSemverError::Feed(msg.into())
    }

    /// Create a publish error with context
    pub fn publish(msg: impl Into<String>) -> Self {
        CiSemverError::Publish(msg.into())
    }

    /// Whether this error was caused by the caller's input rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CiSemverError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CiSemverError::invalid_input("branch is empty");
        assert_eq!(err.to_string(), "Invalid input: branch is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CiSemverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_error_from_git2() {
        let err: CiSemverError = git2::Error::from_str("bad ref").into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (CiSemverError::invalid_input("x"), "Invalid input"),
            (CiSemverError::config("x"), "Configuration error"),
            (CiSemverError::feed("x"), "Package feed error"),
            (CiSemverError::publish("x"), "Publish failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            CiSemverError::invalid_input(""),
            CiSemverError::config(""),
            CiSemverError::feed(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_is_invalid_input() {
        assert!(CiSemverError::invalid_input("x").is_invalid_input());
        assert!(!CiSemverError::publish("x").is_invalid_input());
    }
}
