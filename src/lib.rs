pub mod collector;
pub mod config;
pub mod error;
pub mod facts;
pub mod source;

pub use collector::FactCollector;
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use error::{FactsError, ParseError, SourceError};
pub use facts::{FactModel, MessageCounters, MessageStat, NeighborFact};
pub use source::{CommandOutput, CommandRunner, MockRunner, VtyshRunner};
