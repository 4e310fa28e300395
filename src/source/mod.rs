//! Raw output source abstraction for testability.
//!
//! The collector asks a [`CommandRunner`] for the text of a daemon command.
//! The real runner shells out to `vtysh`; the mock returns scripted output.

pub mod mock;
pub mod vtysh;

pub use mock::MockRunner;
pub use vtysh::VtyshRunner;

use crate::error::SourceError;

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Captured result of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit status; -1 when the process was terminated by a signal.
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Trait for daemon command runners.
///
/// A runner only reports what the command did; judging the exit status is
/// left to the caller.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run one daemon CLI command (e.g. `show ip bgp summary`).
    async fn execute(&self, command: &str) -> SourceResult<CommandOutput>;
}
