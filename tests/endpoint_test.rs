//! EndpointAddress Property Tests
//!
//! Covers:
//! - exact rendering for both families
//! - parse/render idempotence for IPv6 canonical compression
//! - total-order laws across mixed IPv4/IPv6 sets

use netbase::{AddressFamily, EndpointAddress, NetError};
use std::cmp::Ordering;
use std::net::{IpAddr, Ipv6Addr};

#[test]
fn test_ipv4_render_is_exact() {
    let cases = [
        ([0, 0, 0, 0], 0u16),
        ([127, 0, 0, 1], 1),
        ([192, 168, 1, 10], 80),
        ([10, 20, 30, 40], 8080),
        ([255, 255, 255, 255], 65535),
    ];
    for (octets, port) in cases {
        let [a, b, c, d] = octets;
        let ep = EndpointAddress::new(IpAddr::from(octets), port);
        assert_eq!(ep.to_string(), format!("{a}.{b}.{c}.{d}:{port}"));
    }
}

#[test]
fn test_ipv6_parse_render_idempotent() {
    let literals = [
        "::",
        "::1",
        "2001:db8::1",
        "fe80::1",
        "::ffff:192.168.1.120",
        "2001:0db8:0000:0000:0000:ff00:0042:8329",
        "fe80:0:0:0:0:0:0:a",
    ];
    for literal in literals {
        let ep = EndpointAddress::from_host(literal, 2040).unwrap();
        let rendered = ep.to_string();
        let reparsed = EndpointAddress::from_host_port(&rendered).unwrap();
        assert_eq!(reparsed.to_string(), rendered, "literal {literal:?}");
        assert_eq!(reparsed, ep);
        assert_eq!(ep.family(), AddressFamily::V6);
    }
}

#[test]
fn test_bracketed_combined_form() {
    let ep: EndpointAddress = "[::1]:8080".parse().unwrap();
    assert_eq!(ep.family(), AddressFamily::V6);
    assert_eq!(ep.host(), IpAddr::V6(Ipv6Addr::LOCALHOST));
    assert_eq!(ep.port(), 8080);
}

#[test]
fn test_direct_construction_rejects_hostnames() {
    let err = EndpointAddress::from_host("not-an-ip", 80).unwrap_err();
    assert!(matches!(err, NetError::InvalidAddressFormat(_)));
}

fn mixed_sample() -> Vec<EndpointAddress> {
    [
        "0.0.0.0:0",
        "0.0.0.0:1",
        "10.0.0.1:80",
        "10.0.0.1:8080",
        "10.0.0.2:80",
        "255.255.255.255:65535",
        "[::]:0",
        "[::1]:80",
        "[::1]:443",
        "[2001:db8::1]:80",
        "[fe80::1]:22",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect()
}

#[test]
fn test_ordering_is_a_strict_total_order() {
    let sample = mixed_sample();

    for a in &sample {
        // Irreflexive and consistent with equality.
        assert_eq!(a.cmp(a), Ordering::Equal);
        assert!(!(a < a));
        for b in &sample {
            match a.cmp(b) {
                Ordering::Equal => assert_eq!(a, b),
                Ordering::Less => assert_eq!(b.cmp(a), Ordering::Greater),
                Ordering::Greater => assert_eq!(b.cmp(a), Ordering::Less),
            }
            // Transitivity.
            for c in &sample {
                if a <= b && b <= c {
                    assert!(a <= c);
                }
            }
        }
    }
}

#[test]
fn test_ipv4_sorts_before_ipv6() {
    let mut sample = mixed_sample();
    sample.sort();
    let first_v6 = sample
        .iter()
        .position(|e| e.family() == AddressFamily::V6)
        .unwrap();
    assert!(sample[..first_v6]
        .iter()
        .all(|e| e.family() == AddressFamily::V4));
    assert!(sample[first_v6..]
        .iter()
        .all(|e| e.family() == AddressFamily::V6));
}
