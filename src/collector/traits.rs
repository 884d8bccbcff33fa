//! Abstractions for the two host capabilities the collector depends on.
//!
//! The `FileSystem` trait reads pseudo-files, the `CommandRunner` trait
//! captures the output of external utilities. Both have a real
//! implementation for production and an in-memory one in [`super::mock`]
//! for testing off-device.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

/// Error type for source read failures.
///
/// These never leave the collector: they are logged and turned into empty
/// text so the parsers apply their fallback policies.
#[derive(Debug)]
pub enum CollectError {
    /// I/O error reading a file or spawning a command.
    Io(io::Error),
    /// Command ran but exited unsuccessfully.
    CommandFailed {
        command: String,
        /// Exit code, `None` when terminated by a signal.
        status: Option<i32>,
    },
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::CommandFailed {
                command,
                status: Some(code),
            } => write!(f, "`{}` exited with status {}", command, code),
            CollectError::CommandFailed {
                command,
                status: None,
            } => write!(f, "`{}` terminated by signal", command),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io(e) => Some(e),
            CollectError::CommandFailed { .. } => None,
        }
    }
}

impl From<io::Error> for CollectError {
    fn from(e: io::Error) -> Self {
        CollectError::Io(e)
    }
}

/// An external command: program plus arguments, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a command from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl FromStr for CommandSpec {
    type Err = String;

    /// Parses a whitespace-separated command line such as
    /// `"/opt/vc/bin/vcgencmd measure_temp"`. No quoting is supported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| "empty command".to_string())?;
        Ok(Self::new(program, parts))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Abstraction for filesystem reads.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Abstraction for running an external command and capturing its stdout.
pub trait CommandRunner: Send + Sync {
    /// Runs `command` to completion.
    ///
    /// # Returns
    /// Standard output decoded as UTF-8 (lossy), or an error when the
    /// command cannot be spawned or exits unsuccessfully.
    fn run(&self, command: &CommandSpec) -> Result<String, CollectError>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Real command runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealRunner;

impl RealRunner {
    /// Creates a new `RealRunner` instance.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for RealRunner {
    fn run(&self, command: &CommandSpec) -> Result<String, CollectError> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .output()?;

        if !output.status.success() {
            return Err(CollectError::CommandFailed {
                command: command.to_string(),
                status: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
