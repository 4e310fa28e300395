//! Line classifier for `show ip bgp neighbors` output.
//!
//! Each fact shape has its own pattern. Every pattern is tried against every
//! line; the shapes key on distinct phrases so a line normally yields at
//! most one fact, except the neighbor header which carries the address and
//! both AS numbers.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::model::{MessageCounters, MessageStat};
use crate::error::ParseError;

/// A typed fact extracted from a single report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFact {
    NeighborAddress(String),
    RemoteAs(u32),
    LocalAs(u32),
    Description(String),
    State(String),
    Mrai(u32),
    AcceptedPrefixes(u64),
    ConnectionsEstablished(u32),
    ConnectionsDropped(u32),
    RemoteRouterId(String),
    PeerGroup(String),
    Subnet(String),
    GracefulRestart(String),
    PeerRestartTimer(u32),
    PeerAfIpv4Unicast(String),
    PeerAfIpv6Unicast(String),
    MessageStat(MessageStat, MessageCounters),
}

struct Patterns {
    neighbor_address: Regex,
    remote_as: Regex,
    local_as: Regex,
    description: Regex,
    state: Regex,
    mrai: Regex,
    accepted_prefixes: Regex,
    connections_established: Regex,
    connections_dropped: Regex,
    remote_router_id: Regex,
    peer_group: Regex,
    subnet: Regex,
    graceful_restart: Regex,
    peer_restart_timer: Regex,
    peer_af_ipv4: Regex,
    peer_af_ipv6: Regex,
    message_stat: Regex,
}

impl Patterns {
    fn new() -> Self {
        Self {
            neighbor_address: pattern(
                r"^BGP neighbor is \*?([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}|[0-9a-fA-F:]+)",
            ),
            remote_as: pattern(r"remote AS ([0-9]+)"),
            local_as: pattern(r"local AS ([0-9]+)"),
            description: pattern(r"Description: (.*)"),
            state: pattern(r"BGP state = (\w+)"),
            mrai: pattern(r"Minimum time between advertisement runs is ([0-9]+)"),
            accepted_prefixes: pattern(r"([0-9]+) accepted prefixes"),
            connections_established: pattern(r"Connections established ([0-9]+)"),
            connections_dropped: pattern(r"Connections established [0-9]+; dropped ([0-9]+)"),
            remote_router_id: pattern(r"remote router ID ([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})"),
            peer_group: pattern(r"Member of peer-group (.*) for session parameters"),
            subnet: pattern(r"subnet range group: ([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}/[0-9]{1,2})"),
            // Quagga prints "Capabilty"
            graceful_restart: pattern(r"Graceful Restart Capabi(?:li)?ty: (\w+)"),
            peer_restart_timer: pattern(r"Remote Restart timer is ([0-9]+)"),
            peer_af_ipv4: pattern(r"IPv4 Unicast\((.*)\)"),
            peer_af_ipv6: pattern(r"IPv6 Unicast\((.*)\)"),
            message_stat: pattern(
                r"^\s*(Opens|Notifications|Updates|Keepalives|Route Refresh|Capability|Total):\s+([0-9]+)\s+([0-9]+)\s*$",
            ),
        }
    }
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("static regex must compile")
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);

/// Classify one line, returning every fact it carries in a fixed order.
///
/// A pattern that matches but whose numeric group does not fit the target
/// type is an error rather than a skipped line.
pub fn classify(line: &str) -> Result<Vec<LineFact>, ParseError> {
    let p = &*PATTERNS;
    let mut facts = Vec::new();

    if let Some(addr) = capture(&p.neighbor_address, line) {
        facts.push(LineFact::NeighborAddress(addr.to_lowercase()));
    }
    if let Some(n) = capture(&p.remote_as, line) {
        facts.push(LineFact::RemoteAs(number(n, "remote AS", line)?));
    }
    if let Some(n) = capture(&p.local_as, line) {
        facts.push(LineFact::LocalAs(number(n, "local AS", line)?));
    }
    if let Some(text) = capture(&p.description, line) {
        facts.push(LineFact::Description(text.to_string()));
    }
    if let Some(word) = capture(&p.state, line) {
        facts.push(LineFact::State(word.to_lowercase()));
    }
    if let Some(n) = capture(&p.mrai, line) {
        facts.push(LineFact::Mrai(number(n, "mrai", line)?));
    }
    if let Some(n) = capture(&p.accepted_prefixes, line) {
        facts.push(LineFact::AcceptedPrefixes(number(n, "accepted prefixes", line)?));
    }
    if let Some(n) = capture(&p.connections_established, line) {
        facts.push(LineFact::ConnectionsEstablished(number(
            n,
            "connections established",
            line,
        )?));
    }
    if let Some(n) = capture(&p.connections_dropped, line) {
        facts.push(LineFact::ConnectionsDropped(number(n, "connections dropped", line)?));
    }
    if let Some(addr) = capture(&p.remote_router_id, line) {
        facts.push(LineFact::RemoteRouterId(addr.to_string()));
    }
    if let Some(name) = capture(&p.peer_group, line) {
        facts.push(LineFact::PeerGroup(name.to_string()));
    }
    if let Some(cidr) = capture(&p.subnet, line) {
        facts.push(LineFact::Subnet(cidr.to_string()));
    }
    if let Some(word) = capture(&p.graceful_restart, line) {
        facts.push(LineFact::GracefulRestart(word.to_lowercase()));
    }
    if let Some(n) = capture(&p.peer_restart_timer, line) {
        facts.push(LineFact::PeerRestartTimer(number(n, "peer restart timer", line)?));
    }
    if let Some(val) = capture(&p.peer_af_ipv4, line) {
        facts.push(LineFact::PeerAfIpv4Unicast(val.to_lowercase()));
    }
    if let Some(val) = capture(&p.peer_af_ipv6, line) {
        facts.push(LineFact::PeerAfIpv6Unicast(val.to_lowercase()));
    }
    if let Some(caps) = p.message_stat.captures(line) {
        // The alternation only admits known labels.
        if let Some(stat) = MessageStat::from_label(&caps[1]) {
            let sent = number(&caps[2], "message sent count", line)?;
            let rcvd = number(&caps[3], "message received count", line)?;
            facts.push(LineFact::MessageStat(stat, MessageCounters::new(sent, rcvd)));
        }
    }

    Ok(facts)
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

fn number<T: FromStr>(value: &str, field: &'static str, line: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
        line: line.to_string(),
    })
}
