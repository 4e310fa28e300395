//! Mock runner for unit testing the collector.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use super::{CommandOutput, CommandRunner, SourceResult};
use crate::error::SourceError;

/// A scripted command runner.
///
/// Tests register the output each command should produce and can inspect
/// which commands were run, in order. Unscripted commands fail to spawn.
#[derive(Debug, Default)]
pub struct MockRunner {
    outputs: HashMap<String, CommandOutput>,
    executed: Mutex<Vec<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the output returned for `command`.
    pub fn respond(mut self, command: &str, output: CommandOutput) -> Self {
        self.outputs.insert(command.to_string(), output);
        self
    }

    /// Commands executed so far.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().map(|cmds| cmds.clone()).unwrap_or_default()
    }
}

impl CommandRunner for MockRunner {
    async fn execute(&self, command: &str) -> SourceResult<CommandOutput> {
        if let Ok(mut executed) = self.executed.lock() {
            executed.push(command.to_string());
        }
        self.outputs
            .get(command)
            .cloned()
            .ok_or_else(|| SourceError::Spawn {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no scripted output"),
            })
    }
}
