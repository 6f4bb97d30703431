//! Integration tests for subnet-divider
//!
//! These tests verify the complete workflow from CIDR strings to rendered
//! split results.

use subnet_divider::output::{subnets_to_csv, subnets_to_json, CSV_HEADER};
use subnet_divider::{codec, divide_cidr, into_cidr, shift_cidr, Ipv4, SubnetError};

#[test]
fn test_shift_workflow() {
    let subnets = shift_cidr("172.16.0.0/16", 2).expect("Failed to shift /16 by 2");

    let cidrs: Vec<String> = subnets.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        cidrs,
        vec![
            "172.16.0.0/18",
            "172.16.64.0/18",
            "172.16.128.0/18",
            "172.16.192.0/18"
        ]
    );
}

#[test]
fn test_into_workflow_rounds_up() {
    // 3 requested, 4 delivered
    let subnets = into_cidr("10.0.0.0/16", 3).expect("Failed to split /16 into 3");

    let cidrs: Vec<String> = subnets.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        cidrs,
        vec![
            "10.0.0.0/18",
            "10.0.64.0/18",
            "10.0.128.0/18",
            "10.0.192.0/18"
        ]
    );
}

#[test]
fn test_divide_workflow_from_offset() {
    let subnets: Vec<Ipv4> = divide_cidr("172.16.0.128/24", 3)
        .expect("Failed to divide /24 from offset")
        .collect();

    let cidrs: Vec<String> = subnets.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        cidrs,
        vec![
            "172.16.0.128/27",
            "172.16.0.160/27",
            "172.16.0.192/27",
            "172.16.0.224/27"
        ]
    );
}

#[test]
fn test_children_cover_parent_exactly() {
    let parent = Ipv4::new("192.168.0.0/20").unwrap();
    let subnets = shift_cidr("192.168.0.0/20", 5).expect("Failed to shift /20 by 5");

    assert_eq!(subnets.len(), 32);
    assert_eq!(subnets[0].lo(), parent.lo());
    assert_eq!(subnets[31].hi(), parent.hi());
    for pair in subnets.windows(2) {
        // contiguous, no gap and no overlap
        assert_eq!(u32::from(pair[0].hi()) + 1, u32::from(pair[1].lo()));
        assert!(parent.contains(pair[1].lo()));
    }
}

#[test]
fn test_produced_addresses_round_trip() {
    let subnets = shift_cidr("10.42.0.0/16", 4).expect("Failed to shift /16 by 4");

    for subnet in subnets {
        let octets = subnet.addr.octets();
        let merged = codec::merge(&octets).expect("Failed to merge produced address");
        assert_eq!(codec::split(merged), octets);
    }
}

#[test]
fn test_errors_are_typed() {
    assert_eq!(
        shift_cidr("not-a-cidr", 1).unwrap_err(),
        SubnetError::InvalidCidr {
            input: "not-a-cidr".to_string()
        }
    );
    assert_eq!(
        shift_cidr("10.0.0.0/24", 16).unwrap_err(),
        SubnetError::PrefixOverflow {
            prefix: 24,
            add: 16,
            limit: 32
        }
    );
    assert_eq!(
        divide_cidr("10.0.0.0/8", 40).unwrap_err(),
        SubnetError::BitsOutOfRange { bits: 40 }
    );
    assert_eq!(
        divide_cidr("172.16.0.130/24", 3).unwrap_err(),
        SubnetError::MisalignedAddress {
            addr: "172.16.0.130".parse().unwrap(),
            prefix: 27
        }
    );
}

#[test]
fn test_csv_output() {
    let subnets = shift_cidr("10.0.0.0/16", 1).expect("Failed to shift /16 by 1");
    let csv = subnets_to_csv(&subnets);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1], r#""1","10.0.0.0/17","10.0.127.255","32768""#);
    assert_eq!(lines[2], r#""2","10.0.128.0/17","10.0.255.255","32768""#);
}

#[test]
fn test_json_output_round_trips() {
    let subnets = shift_cidr("10.0.0.0/16", 2).expect("Failed to shift /16 by 2");
    let json = subnets_to_json(&subnets).expect("Failed to render JSON");

    let back: Vec<Ipv4> = serde_json::from_str(&json).expect("Failed to parse rendered JSON");
    assert_eq!(back, subnets);
}
