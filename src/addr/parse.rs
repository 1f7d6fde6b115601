//! Local address-string validation.
//!
//! Everything here is pure parsing: malformed input is rejected before any
//! resolver or network call could be attempted.

use crate::base::neterror::NetError;
use std::net::{IpAddr, Ipv6Addr};

/// Parses an IP literal, including scoped IPv6 literals (`fe80::1%3`,
/// `fe80::1%eth0`). Returns the address and the scope id (zero when
/// absent). `None` means the string is not a literal at all.
pub(crate) fn parse_ip_literal(s: &str) -> Option<(IpAddr, u32)> {
    if let Ok(ip) = s.parse::<IpAddr>() {
        return Some((ip, 0));
    }
    // Only IPv6 literals carry a zone suffix.
    let (addr, zone) = s.split_once('%')?;
    let ip: Ipv6Addr = addr.parse().ok()?;
    let scope = zone.parse::<u32>().ok().or_else(|| zone_index(zone))?;
    Some((IpAddr::V6(ip), scope))
}

#[cfg(unix)]
fn zone_index(zone: &str) -> Option<u32> {
    let c_zone = std::ffi::CString::new(zone).ok()?;
    match unsafe { libc::if_nametoindex(c_zone.as_ptr()) } {
        0 => None,
        index => Some(index),
    }
}

#[cfg(not(unix))]
fn zone_index(_zone: &str) -> Option<u32> {
    None
}

/// Splits a combined `host:port` string.
///
/// IPv6 host parts must be bracket-delimited (`[addr]:port`); an
/// unbracketed host containing a colon is rejected as ambiguous. The port
/// part is returned unparsed.
pub(crate) fn split_host_port(s: &str) -> Result<(&str, &str), NetError> {
    let invalid = || NetError::InvalidAddressFormat(s.to_string());

    let (host, port) = if let Some(rest) = s.strip_prefix('[') {
        let end = rest.find(']').ok_or_else(invalid)?;
        let tail = &rest[end + 1..];
        let port = tail.strip_prefix(':').ok_or_else(invalid)?;
        (&rest[..end], port)
    } else {
        let sep = s.rfind(':').ok_or_else(invalid)?;
        let host = &s[..sep];
        if host.contains(':') {
            return Err(invalid());
        }
        (host, &s[sep + 1..])
    };

    if host.is_empty() || port.is_empty() || host.contains('[') || host.contains(']') {
        return Err(invalid());
    }
    Ok((host, port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_plain_literals() {
        assert_eq!(
            parse_ip_literal("127.0.0.1"),
            Some((IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0))
        );
        assert_eq!(
            parse_ip_literal("::1"),
            Some((IpAddr::V6(Ipv6Addr::LOCALHOST), 0))
        );
        assert_eq!(parse_ip_literal("example.com"), None);
        assert_eq!(parse_ip_literal(""), None);
    }

    #[test]
    fn test_scoped_literal_numeric_zone() {
        let (ip, scope) = parse_ip_literal("fe80::1%3").unwrap();
        assert!(ip.is_ipv6());
        assert_eq!(scope, 3);
    }

    #[test]
    fn test_zone_on_ipv4_rejected() {
        assert_eq!(parse_ip_literal("127.0.0.1%3"), None);
    }

    #[test]
    fn test_split_bracketed() {
        assert_eq!(split_host_port("[::1]:8080").unwrap(), ("::1", "8080"));
        assert_eq!(
            split_host_port("[fe80::1%3]:80").unwrap(),
            ("fe80::1%3", "80")
        );
    }

    #[test]
    fn test_split_plain() {
        assert_eq!(
            split_host_port("192.168.1.10:80").unwrap(),
            ("192.168.1.10", "80")
        );
    }

    #[test]
    fn test_split_rejects_malformed() {
        for input in [
            "192.168.1.10",  // missing colon
            "[::1:8080",     // unbalanced brackets
            "[::1]8080",     // missing colon after bracket
            "[::1]:",        // empty port
            ":80",           // empty host
            "::1:8080",      // unbracketed IPv6
            "[[::1]]:80",    // stray brackets
        ] {
            assert!(
                matches!(
                    split_host_port(input),
                    Err(NetError::InvalidAddressFormat(_))
                ),
                "expected rejection of {input:?}"
            );
        }
    }
}
