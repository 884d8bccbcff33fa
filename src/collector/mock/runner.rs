//! In-memory command runner for testing without the board utilities.

use crate::collector::traits::{CollectError, CommandRunner, CommandSpec};
use std::collections::HashMap;

/// Canned command outputs keyed by command line.
///
/// Commands without an entry fail the way a missing binary does, with a
/// `NotFound` I/O error.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    outputs: HashMap<String, Result<String, Option<i32>>>,
}

impl MockRunner {
    /// Creates a runner that knows no commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the stdout of a successful run of `command`.
    pub fn add_output(&mut self, command: &CommandSpec, stdout: impl Into<String>) {
        self.outputs.insert(command.to_string(), Ok(stdout.into()));
    }

    /// Registers `command` as exiting with the given status.
    pub fn add_failure(&mut self, command: &CommandSpec, status: Option<i32>) {
        self.outputs.insert(command.to_string(), Err(status));
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &CommandSpec) -> Result<String, CollectError> {
        let key = command.to_string();
        match self.outputs.get(&key) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(status)) => Err(CollectError::CommandFailed {
                command: key,
                status: *status,
            }),
            None => Err(CollectError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("command not found: {}", command.program),
            ))),
        }
    }
}
