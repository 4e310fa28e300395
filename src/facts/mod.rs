//! BGP fact extraction from routing daemon reports.
//!
//! Parsing is a pure function of the two report texts:
//! `show ip bgp summary` feeds [`summary`], `show ip bgp neighbors` is cut
//! into blocks by [`segment`] and each block is folded into a
//! [`NeighborFact`] by [`neighbor`] using the [`classifier`].

pub mod classifier;
pub mod model;
pub mod neighbor;
pub mod segment;
pub mod summary;

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

pub use classifier::{classify, LineFact};
pub use model::{Capabilities, MessageCounters, MessageStat, NeighborFact};
pub use neighbor::{parse_block, parse_neighbors, NeighborBuilder};
pub use segment::segment_neighbors;
pub use summary::parse_summary;

use crate::error::ParseError;

/// Facts for one collection run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FactModel {
    /// Local AS number from the summary report.
    #[serde(
        rename = "bgp_localasn",
        serialize_with = "asn_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub local_asn: Option<u32>,
    /// Neighbor facts keyed by lowercased address.
    #[serde(rename = "bgp_neighbors")]
    pub neighbors: BTreeMap<String, NeighborFact>,
}

impl FactModel {
    /// Build the fact model from the summary and neighbor reports.
    pub fn parse(summary: &str, neighbors: &str) -> Result<Self, ParseError> {
        Ok(Self {
            local_asn: parse_summary(summary)?,
            neighbors: parse_neighbors(neighbors)?,
        })
    }

    pub fn neighbor(&self, address: &str) -> Option<&NeighborFact> {
        self.neighbors.get(address)
    }

    /// Render as the JSON object consumers key into.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Wrap the facts the way an Ansible module reports them.
    pub fn to_ansible_value(&self) -> serde_json::Result<serde_json::Value> {
        Ok(serde_json::json!({ "ansible_facts": serde_json::to_value(self)? }))
    }
}

fn asn_as_string<S: Serializer>(asn: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
    match asn {
        Some(asn) => serializer.collect_str(asn),
        None => serializer.serialize_none(),
    }
}
