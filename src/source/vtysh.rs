//! `vtysh`-backed command runner.

use log::debug;
use tokio::process::Command;

use super::{CommandOutput, CommandRunner, SourceResult};
use crate::error::SourceError;

/// Default vtysh binary.
pub const DEFAULT_VTYSH: &str = "vtysh";

/// Runs daemon commands as `vtysh [-n <instance>] -c <command>`.
#[derive(Debug, Clone)]
pub struct VtyshRunner {
    program: String,
    /// Namespace/ASIC instance on multi-ASIC systems.
    instance: Option<u32>,
}

impl Default for VtyshRunner {
    fn default() -> Self {
        Self::new(DEFAULT_VTYSH)
    }
}

impl VtyshRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            instance: None,
        }
    }

    pub fn with_instance(mut self, instance: Option<u32>) -> Self {
        self.instance = instance;
        self
    }

    /// Full argument list passed to the vtysh binary.
    pub fn args(&self, command: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(4);
        if let Some(instance) = self.instance {
            args.push("-n".to_string());
            args.push(instance.to_string());
        }
        args.push("-c".to_string());
        args.push(command.to_string());
        args
    }

    /// Human readable command line, used in errors and logs.
    pub fn command_line(&self, command: &str) -> String {
        let mut line = self.program.clone();
        for arg in self.args(command) {
            line.push(' ');
            if arg.contains(' ') {
                line.push_str(&format!("\"{}\"", arg));
            } else {
                line.push_str(&arg);
            }
        }
        line
    }
}

impl CommandRunner for VtyshRunner {
    async fn execute(&self, command: &str) -> SourceResult<CommandOutput> {
        debug!("Running {}", self.command_line(command));

        let output = Command::new(&self.program)
            .args(self.args(command))
            .output()
            .await
            .map_err(|e| SourceError::Spawn {
                command: self.command_line(command),
                source: e,
            })?;

        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_instance() {
        let runner = VtyshRunner::default();
        assert_eq!(runner.args("show ip bgp summary"), vec!["-c", "show ip bgp summary"]);
        assert_eq!(
            runner.command_line("show ip bgp summary"),
            "vtysh -c \"show ip bgp summary\""
        );
    }

    #[test]
    fn test_args_with_instance() {
        let runner = VtyshRunner::new("/usr/bin/vtysh").with_instance(Some(2));
        assert_eq!(
            runner.args("show ip bgp neighbors"),
            vec!["-n", "2", "-c", "show ip bgp neighbors"]
        );
        assert_eq!(
            runner.command_line("show ip bgp neighbors"),
            "/usr/bin/vtysh -n 2 -c \"show ip bgp neighbors\""
        );
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let runner = VtyshRunner::new("/nonexistent/bgp-facts-vtysh");

        let result = runner.execute("show ip bgp summary").await;

        match result {
            Err(SourceError::Spawn { command, .. }) => {
                assert!(command.starts_with("/nonexistent/bgp-facts-vtysh"));
            }
            other => panic!("expected Spawn error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exit_code_and_output_are_captured() {
        // `sh -c <script>` stands in for vtysh: the script is the -c argument.
        let runner = VtyshRunner::new("sh");

        let output = runner.execute("echo out; echo err >&2; exit 3").await.unwrap();

        assert_eq!(output.code, 3);
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }
}
