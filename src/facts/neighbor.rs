//! Builds one `NeighborFact` per neighbor block.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::{debug, trace};

use super::classifier::{classify, LineFact};
use super::model::{Capabilities, MessageCounters, MessageStat, NeighborFact};
use super::segment::segment_neighbors;
use crate::error::ParseError;

/// Accumulates the facts of a single neighbor block.
///
/// Capabilities and message statistics are held here until [`finish`] and
/// only attached to the record when non-empty.
///
/// [`finish`]: NeighborBuilder::finish
#[derive(Debug, Default)]
pub struct NeighborBuilder {
    address: Option<String>,
    fact: NeighborFact,
    capabilities: Capabilities,
    message_statistics: BTreeMap<MessageStat, MessageCounters>,
}

impl NeighborBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a line and apply everything it carries.
    pub fn feed_line(&mut self, line: &str) -> Result<(), ParseError> {
        for fact in classify(line)? {
            trace!("{:?}", fact);
            self.apply(fact);
        }
        Ok(())
    }

    /// Apply one fact. Later values replace earlier ones, except accepted
    /// prefixes (summed) and the neighbor address (first wins).
    pub fn apply(&mut self, fact: LineFact) {
        match fact {
            LineFact::NeighborAddress(addr) => {
                if self.address.is_none() {
                    self.address = Some(addr);
                }
            }
            LineFact::RemoteAs(asn) => self.fact.remote_as = Some(asn),
            LineFact::LocalAs(asn) => self.fact.local_as = Some(asn),
            LineFact::Description(text) => self.fact.description = Some(text),
            LineFact::State(state) => self.fact.state = Some(state),
            LineFact::Mrai(secs) => self.fact.mrai = Some(secs),
            LineFact::AcceptedPrefixes(count) => {
                self.fact.accepted_prefixes = self.fact.accepted_prefixes.saturating_add(count)
            }
            LineFact::ConnectionsEstablished(n) => self.fact.connections_established = Some(n),
            LineFact::ConnectionsDropped(n) => self.fact.connections_dropped = Some(n),
            LineFact::RemoteRouterId(id) => self.fact.remote_router_id = Some(id),
            LineFact::PeerGroup(name) => self.fact.peer_group = Some(name),
            LineFact::Subnet(cidr) => self.fact.subnet = Some(cidr),
            LineFact::GracefulRestart(mode) => self.capabilities.graceful_restart = Some(mode),
            LineFact::PeerRestartTimer(secs) => self.capabilities.peer_restart_timer = Some(secs),
            LineFact::PeerAfIpv4Unicast(val) => self.capabilities.peer_af_ipv4_unicast = Some(val),
            LineFact::PeerAfIpv6Unicast(val) => self.capabilities.peer_af_ipv6_unicast = Some(val),
            LineFact::MessageStat(stat, counters) => {
                self.message_statistics.insert(stat, counters);
            }
        }
    }

    /// Close the block. `block` is only used to describe a missing address.
    pub fn finish(self, block: &str) -> Result<(String, NeighborFact), ParseError> {
        let Some(address) = self.address else {
            return Err(ParseError::MissingNeighborAddress {
                excerpt: excerpt(block),
            });
        };

        let mut fact = self.fact;
        if !self.capabilities.is_empty() {
            fact.capabilities = Some(self.capabilities);
        }
        fact.message_statistics = self.message_statistics;

        Ok((address, fact))
    }
}

/// Parse a single "BGP neighbor is" block.
pub fn parse_block(block: &str) -> Result<(String, NeighborFact), ParseError> {
    let mut builder = NeighborBuilder::new();
    for line in block.lines() {
        builder.feed_line(line)?;
    }
    builder.finish(block)
}

/// Parse a whole `show ip bgp neighbors` report, keyed by neighbor address.
pub fn parse_neighbors(text: &str) -> Result<BTreeMap<String, NeighborFact>, ParseError> {
    let mut neighbors = BTreeMap::new();

    for block in segment_neighbors(text) {
        let (address, fact) = parse_block(&block)?;
        debug!(
            "Neighbor {}: state={:?} remote_as={:?}",
            address, fact.state, fact.remote_as
        );
        match neighbors.entry(address) {
            Entry::Vacant(slot) => {
                slot.insert(fact);
            }
            Entry::Occupied(slot) => {
                return Err(ParseError::DuplicateNeighbor {
                    address: slot.key().clone(),
                });
            }
        }
    }

    Ok(neighbors)
}

fn excerpt(block: &str) -> String {
    block.lines().next().unwrap_or_default().trim_end().to_string()
}
