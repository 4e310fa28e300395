//! Error types for bgp-facts.
//!
//! Every failure is fatal for the run: collection either yields a complete
//! fact model or one of these errors, never a partial result.

use std::io;
use thiserror::Error;

/// Top-level error type for fact collection.
#[derive(Error, Debug)]
pub enum FactsError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The command could not be started.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// The command ran but exited with a non-zero status.
    #[error("Command failed rc={code}, command={command}, out={stdout}, err={stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    /// The report text could not be turned into facts.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by the raw output source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to spawn the command.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while parsing daemon reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A neighbor block has no recognizable address line.
    #[error("neighbor block without address: {excerpt:?}")]
    MissingNeighborAddress { excerpt: String },

    /// Two blocks report the same neighbor address.
    #[error("duplicate neighbor address: {address}")]
    DuplicateNeighbor { address: String },

    /// A matched numeric field does not fit its integer type.
    #[error("invalid {field} value {value:?} in line {line:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        line: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = FactsError::CommandFailed {
            command: "show ip bgp summary".to_string(),
            code: 1,
            stdout: String::new(),
            stderr: "bgpd is not running".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("rc=1"));
        assert!(msg.contains("show ip bgp summary"));
        assert!(msg.contains("bgpd is not running"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: FactsError = ParseError::DuplicateNeighbor {
            address: "10.0.0.1".to_string(),
        }
        .into();
        assert!(matches!(err, FactsError::Parse(_)));
        assert_eq!(err.to_string(), "parse error: duplicate neighbor address: 10.0.0.1");
    }

    #[test]
    fn test_missing_address_names_excerpt() {
        let err = ParseError::MissingNeighborAddress {
            excerpt: "BGP neighbor is swp1".to_string(),
        };
        assert!(err.to_string().contains("BGP neighbor is swp1"));
    }
}
