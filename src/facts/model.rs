//! Typed fact records.
//!
//! Serialized field names are the keys existing consumers index into
//! (`remote AS`, `local AS`, `accepted prefixes`, ...) and must not change.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Message counter rows of the "Message statistics" table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MessageStat {
    Opens,
    Notifications,
    Updates,
    Keepalives,
    #[serde(rename = "Route Refresh")]
    RouteRefresh,
    Capability,
    Total,
}

impl MessageStat {
    pub const ALL: [MessageStat; 7] = [
        MessageStat::Opens,
        MessageStat::Notifications,
        MessageStat::Updates,
        MessageStat::Keepalives,
        MessageStat::RouteRefresh,
        MessageStat::Capability,
        MessageStat::Total,
    ];

    /// Row label as printed by the daemon.
    pub fn label(&self) -> &'static str {
        match self {
            MessageStat::Opens => "Opens",
            MessageStat::Notifications => "Notifications",
            MessageStat::Updates => "Updates",
            MessageStat::Keepalives => "Keepalives",
            MessageStat::RouteRefresh => "Route Refresh",
            MessageStat::Capability => "Capability",
            MessageStat::Total => "Total",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stat| stat.label() == label)
    }
}

impl fmt::Display for MessageStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sent/received pair for one message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MessageCounters {
    pub sent: u64,
    pub rcvd: u64,
}

impl MessageCounters {
    pub fn new(sent: u64, rcvd: u64) -> Self {
        Self { sent, rcvd }
    }
}

/// Graceful restart capability facts advertised by a neighbor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Capabilities {
    #[serde(rename = "graceful restart", skip_serializing_if = "Option::is_none")]
    pub graceful_restart: Option<String>,
    #[serde(rename = "peer restart timer", skip_serializing_if = "Option::is_none")]
    pub peer_restart_timer: Option<u32>,
    #[serde(rename = "peer af ipv4 unicast", skip_serializing_if = "Option::is_none")]
    pub peer_af_ipv4_unicast: Option<String>,
    #[serde(rename = "peer af ipv6 unicast", skip_serializing_if = "Option::is_none")]
    pub peer_af_ipv6_unicast: Option<String>,
}

impl Capabilities {
    pub fn is_empty(&self) -> bool {
        self.graceful_restart.is_none()
            && self.peer_restart_timer.is_none()
            && self.peer_af_ipv4_unicast.is_none()
            && self.peer_af_ipv6_unicast.is_none()
    }
}

/// Everything extracted from one "BGP neighbor is" block.
///
/// Optional fields are `Some` only when their line occurred in the block.
/// `accepted_prefixes` is the sum over all address families.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NeighborFact {
    #[serde(rename = "remote AS", skip_serializing_if = "Option::is_none")]
    pub remote_as: Option<u32>,
    #[serde(rename = "local AS", skip_serializing_if = "Option::is_none")]
    pub local_as: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrai: Option<u32>,
    #[serde(rename = "accepted prefixes")]
    pub accepted_prefixes: u64,
    #[serde(rename = "connections established", skip_serializing_if = "Option::is_none")]
    pub connections_established: Option<u32>,
    #[serde(rename = "connections dropped", skip_serializing_if = "Option::is_none")]
    pub connections_dropped: Option<u32>,
    #[serde(rename = "remote routerid", skip_serializing_if = "Option::is_none")]
    pub remote_router_id: Option<String>,
    #[serde(rename = "peer group", skip_serializing_if = "Option::is_none")]
    pub peer_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
    #[serde(rename = "message statistics", skip_serializing_if = "BTreeMap::is_empty")]
    pub message_statistics: BTreeMap<MessageStat, MessageCounters>,
}

impl NeighborFact {
    /// Returns true if the session is in the Established state.
    pub fn is_established(&self) -> bool {
        self.state.as_deref() == Some("established")
    }
}
