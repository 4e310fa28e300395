//! Fact collection: run both daemon commands, then parse.
//!
//! Both reports are fetched before any parsing starts, so a failing command
//! never produces partial facts.

use log::{debug, info};

use crate::config::Config;
use crate::error::FactsError;
use crate::facts::FactModel;
use crate::source::{CommandRunner, VtyshRunner};

/// Collects BGP facts through a [`CommandRunner`].
pub struct FactCollector<R> {
    runner: R,
    summary_command: String,
    neighbor_command: String,
}

impl FactCollector<VtyshRunner> {
    /// Collector backed by the vtysh binary and instance from `config`.
    pub fn from_config(config: &Config) -> Self {
        let runner = VtyshRunner::new(config.vtysh.clone()).with_instance(config.instance);
        Self::new(runner, config)
    }
}

impl<R: CommandRunner> FactCollector<R> {
    pub fn new(runner: R, config: &Config) -> Self {
        Self {
            runner,
            summary_command: config.summary_command.clone(),
            neighbor_command: config.neighbor_command.clone(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the summary and neighbor commands and parse their output.
    pub async fn collect(&self) -> Result<FactModel, FactsError> {
        let summary = self.fetch(&self.summary_command).await?;
        let neighbors = self.fetch(&self.neighbor_command).await?;

        let facts = FactModel::parse(&summary, &neighbors)?;
        info!(
            "Collected facts for {} neighbor(s), local ASN {:?}",
            facts.neighbors.len(),
            facts.local_asn
        );
        Ok(facts)
    }

    async fn fetch(&self, command: &str) -> Result<String, FactsError> {
        let output = self.runner.execute(command).await?;

        if !output.is_success() {
            return Err(FactsError::CommandFailed {
                command: command.to_string(),
                code: output.code,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        debug!("`{}` returned {} bytes", command, output.stdout.len());
        Ok(output.stdout)
    }
}
