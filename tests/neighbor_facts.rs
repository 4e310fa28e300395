//! End-to-end parsing of captured daemon reports.

use bgp_facts::facts::{parse_neighbors, Capabilities};
use bgp_facts::{FactModel, MessageCounters, MessageStat, ParseError};
use serde_json::json;

const QUAGGA_SUMMARY: &str = include_str!("fixtures/quagga_summary.txt");
const FRR_SUMMARY: &str = include_str!("fixtures/frr_summary.txt");
const QUAGGA_NEIGHBORS: &str = include_str!("fixtures/quagga_neighbors.txt");

const CANONICAL_BLOCK: &str = "\
BGP neighbor is 10.0.0.61, remote AS 64015, local AS 65100, external link
 Description: ARISTA15T0
  BGP state = Active
  Last read 6d13h16m, hold time is 180, keepalive interval is 60 seconds
  Message statistics:
    Inq depth is 0
    Outq depth is 0
                         Sent       Rcvd
    Opens:                  1          1
    Updates:             6595          3
  Minimum time between advertisement runs is 30 seconds

 For address family: IPv4 Unicast
  Community attribute sent to this neighbor(both)
  0 accepted prefixes

  Connections established 1; dropped 1
  Last reset 6d13h15m, due to
Next connect timer due in 31 seconds
Read thread: off  Write thread: off
";

#[test]
fn test_canonical_block() {
    let facts = FactModel::parse("", CANONICAL_BLOCK).unwrap();
    let value = serde_json::to_value(&facts).unwrap();

    assert_eq!(
        value["bgp_neighbors"]["10.0.0.61"],
        json!({
            "remote AS": 64015,
            "local AS": 65100,
            "description": "ARISTA15T0",
            "state": "active",
            "mrai": 30,
            "accepted prefixes": 0,
            "connections established": 1,
            "connections dropped": 1,
            "message statistics": {
                "Opens": { "sent": 1, "rcvd": 1 },
                "Updates": { "sent": 6595, "rcvd": 3 }
            }
        })
    );
}

#[test]
fn test_every_block_becomes_one_neighbor() {
    let neighbors = parse_neighbors(QUAGGA_NEIGHBORS).unwrap();

    assert_eq!(QUAGGA_NEIGHBORS.matches("BGP neighbor is").count(), neighbors.len());
    let keys: Vec<&str> = neighbors.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["10.0.0.57", "10.255.0.2", "fc00::72"]);
}

#[test]
fn test_established_ipv4_neighbor() {
    let facts = FactModel::parse(QUAGGA_SUMMARY, QUAGGA_NEIGHBORS).unwrap();
    let n = facts.neighbor("10.0.0.57").unwrap();

    assert!(n.is_established());
    assert_eq!(n.remote_as, Some(64600));
    assert_eq!(n.local_as, Some(65100));
    assert_eq!(n.description.as_deref(), Some("ARISTA01T1"));
    assert_eq!(n.remote_router_id.as_deref(), Some("100.1.0.29"));
    assert_eq!(n.mrai, Some(0));
    assert_eq!(n.accepted_prefixes, 6400);
    assert_eq!(n.connections_established, Some(1));
    assert_eq!(n.connections_dropped, Some(0));
    assert!(n.peer_group.is_none());
    assert_eq!(
        n.capabilities,
        Some(Capabilities {
            graceful_restart: Some("advertised".to_string()),
            peer_restart_timer: Some(120),
            peer_af_ipv4_unicast: Some("preserved".to_string()),
            peer_af_ipv6_unicast: None,
        })
    );
    assert_eq!(n.message_statistics.len(), MessageStat::ALL.len());
    assert_eq!(
        n.message_statistics[&MessageStat::Updates],
        MessageCounters::new(3, 3199)
    );
}

#[test]
fn test_dynamic_neighbor_without_capabilities() {
    let facts = FactModel::parse(QUAGGA_SUMMARY, QUAGGA_NEIGHBORS).unwrap();
    let n = facts.neighbor("10.255.0.2").unwrap();

    assert_eq!(n.state.as_deref(), Some("active"));
    assert_eq!(n.remote_as, Some(64700));
    assert_eq!(n.peer_group.as_deref(), Some("BGPSLBPassive"));
    assert_eq!(n.subnet.as_deref(), Some("10.255.0.0/25"));
    assert_eq!(n.mrai, Some(30));
    assert!(n.description.is_none());
    assert!(n.capabilities.is_none());

    let value = serde_json::to_value(n).unwrap();
    assert!(value.get("capabilities").is_none());
    assert!(value.get("description").is_none());
}

#[test]
fn test_ipv6_neighbor_sums_address_families() {
    let facts = FactModel::parse(QUAGGA_SUMMARY, QUAGGA_NEIGHBORS).unwrap();
    let n = facts.neighbor("fc00::72").unwrap();

    assert_eq!(n.accepted_prefixes, 6400);
    assert_eq!(n.peer_group.as_deref(), Some("PEER_V6"));
    let caps = n.capabilities.as_ref().unwrap();
    assert_eq!(caps.peer_restart_timer, Some(240));
    assert_eq!(caps.peer_af_ipv6_unicast.as_deref(), Some("not preserved"));
    assert!(caps.peer_af_ipv4_unicast.is_none());
}

#[test]
fn test_accepted_prefixes_accumulate() {
    let text = "BGP neighbor is 10.0.0.1, remote AS 64001, local AS 65100\n\
                \x20 BGP state = Established, up for 00:08:14\n\
                \x20 1 accepted prefixes\n  2 accepted prefixes\n  3 accepted prefixes\n";
    let neighbors = parse_neighbors(text).unwrap();
    assert_eq!(neighbors["10.0.0.1"].accepted_prefixes, 6);
}

#[test]
fn test_summary_asn() {
    let facts = FactModel::parse(QUAGGA_SUMMARY, "").unwrap();
    assert_eq!(facts.local_asn, Some(65100));
    assert!(facts.neighbors.is_empty());
}

// The ASN is only read from the first line; FRR's banner hides it.
#[test]
fn test_frr_summary_asn_not_found() {
    let facts = FactModel::parse(FRR_SUMMARY, "").unwrap();
    assert_eq!(facts.local_asn, None);
}

#[test]
fn test_idempotent() {
    let first = FactModel::parse(QUAGGA_SUMMARY, QUAGGA_NEIGHBORS).unwrap();
    let second = FactModel::parse(QUAGGA_SUMMARY, QUAGGA_NEIGHBORS).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_no_neighbors() {
    let facts = FactModel::parse(QUAGGA_SUMMARY, "% No BGP neighbors found\n").unwrap();
    assert!(facts.neighbors.is_empty());
}

#[test]
fn test_unnumbered_neighbor_fails_the_report() {
    let text = format!(
        "{}\nBGP neighbor is swp2, remote AS 64600\n  BGP state = Idle\n",
        CANONICAL_BLOCK
    );
    match FactModel::parse("", &text) {
        Err(ParseError::MissingNeighborAddress { excerpt }) => {
            assert_eq!(excerpt, "BGP neighbor is swp2, remote AS 64600");
        }
        other => panic!("expected MissingNeighborAddress, got {:?}", other),
    }
}
