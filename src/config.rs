use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::source::vtysh::DEFAULT_VTYSH;

/// Default configuration file path, read only when present.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/bgp-facts/config.toml";

pub const DEFAULT_SUMMARY_COMMAND: &str = "show ip bgp summary";
pub const DEFAULT_NEIGHBOR_COMMAND: &str = "show ip bgp neighbors";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the vtysh binary
    #[serde(default = "default_vtysh")]
    pub vtysh: String,
    /// Namespace/ASIC instance on multi-ASIC systems
    pub instance: Option<u32>,
    #[serde(default = "default_summary_command")]
    pub summary_command: String,
    #[serde(default = "default_neighbor_command")]
    pub neighbor_command: String,
}

fn default_vtysh() -> String {
    DEFAULT_VTYSH.to_string()
}

fn default_summary_command() -> String {
    DEFAULT_SUMMARY_COMMAND.to_string()
}

fn default_neighbor_command() -> String {
    DEFAULT_NEIGHBOR_COMMAND.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vtysh: default_vtysh(),
            instance: None,
            summary_command: default_summary_command(),
            neighbor_command: default_neighbor_command(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> io::Result<Self> {
        toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
