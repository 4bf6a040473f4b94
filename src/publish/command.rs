use std::process::Command;

use crate::config::PublishConfig;
use crate::error::{CiSemverError, Result};
use crate::publish::BuildVersionPublisher;

/// Placeholder replaced with the derived version in command arguments
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Publishes the version by running an external command,
/// by default `appveyor UpdateBuild -Version {version}`
#[derive(Debug, Clone, PartialEq)]
pub struct CommandPublisher {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandPublisher {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandPublisher {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &PublishConfig) -> Self {
        CommandPublisher::new(config.program.clone(), config.args.clone())
    }

    /// Arguments with the version placeholder substituted
    pub fn render_args(&self, version: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(VERSION_PLACEHOLDER, version))
            .collect()
    }
}

impl BuildVersionPublisher for CommandPublisher {
    /// Run the command; exit code 0 is success, anything else is a failure
    fn publish(&self, version: &str) -> Result<()> {
        let output = Command::new(&self.program)
            .args(self.render_args(version))
            .output()
            .map_err(|e| {
                CiSemverError::publish(format!("Failed to execute {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Err(CiSemverError::publish(format!(
                "{} failed with exit code {}\nStdout: {}\nStderr: {}",
                self.program,
                output.status.code().unwrap_or(-1),
                stdout,
                stderr
            )));
        }

        Ok(())
    }
}
