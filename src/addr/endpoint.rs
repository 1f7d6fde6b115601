//! The endpoint address value type.

use crate::addr::parse::{parse_ip_literal, split_host_port};
use crate::addr::service::resolve_service;
use crate::base::neterror::NetError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::str::FromStr;

/// The address family of an endpoint.
///
/// The derived order (IPv4 before IPv6) is part of the public ordering
/// contract of [`EndpointAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

/// Family-tagged payload. The tag and payload shape are a single enum
/// variant, so they can never disagree; both payloads are plain data and
/// the whole value is `Copy` with no per-instance heap allocation.
#[derive(Debug, Clone, Copy)]
enum Repr {
    V4(SocketAddrV4),
    V6(SocketAddrV6),
}

/// An internet endpoint: {IP address, port}.
///
/// The address belongs to either the IPv4 or the IPv6 family, selected at
/// runtime. Values are immutable, `Copy`, and safe to create in bulk on
/// bind/connect/enumerate paths.
///
/// Equality, ordering, and hashing are defined over (family, ip bytes,
/// port) only. The IPv6 scope id is preserved — link-local addresses are
/// not routable without it — but does not participate in comparisons.
/// Ordering is total: IPv4 sorts before IPv6, then ip bytes, then port.
///
/// Rendering is exact for log/test interoperability: `a.b.c.d:port` for
/// IPv4, `[addr]:port` for IPv6 in lowercase compressed notation, with a
/// non-zero scope id appended as `%scope` inside the brackets.
#[derive(Debug, Clone, Copy)]
pub struct EndpointAddress {
    repr: Repr,
}

impl EndpointAddress {
    /// Creates an endpoint from an IP address and port number.
    pub fn new(host: IpAddr, port: u16) -> Self {
        let repr = match host {
            IpAddr::V4(v4) => Repr::V4(SocketAddrV4::new(v4, port)),
            IpAddr::V6(v6) => Repr::V6(SocketAddrV6::new(v6, port, 0, 0)),
        };
        Self { repr }
    }

    /// Creates an IPv6 endpoint with an explicit scope id.
    pub fn with_scope(host: Ipv6Addr, port: u16, scope_id: u32) -> Self {
        Self {
            repr: Repr::V6(SocketAddrV6::new(host, port, 0, scope_id)),
        }
    }

    /// Creates a wildcard (any-address) IPv4 endpoint with the given port.
    pub fn wildcard(port: u16) -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port)
    }

    /// Creates an endpoint from a host string and port number.
    ///
    /// The host must already be an IP literal (scoped IPv6 literals are
    /// accepted). This constructor never resolves names: a non-literal
    /// string fails with [`NetError::InvalidAddressFormat`] — route host
    /// names through the [`Resolver`](crate::dns::Resolver) first.
    pub fn from_host(host: &str, port: u16) -> Result<Self, NetError> {
        match parse_ip_literal(host) {
            Some((IpAddr::V4(v4), _)) => Ok(Self::new(IpAddr::V4(v4), port)),
            Some((IpAddr::V6(v6), scope)) => Ok(Self::with_scope(v6, port, scope)),
            None => Err(NetError::InvalidAddressFormat(host.to_string())),
        }
    }

    /// Creates an endpoint from a host string and a service string.
    ///
    /// The service may be a decimal port number or a name from the
    /// platform's service database; unmapped names fail with
    /// [`NetError::ServiceNotFound`].
    pub fn from_host_service(host: &str, service: &str) -> Result<Self, NetError> {
        let port = resolve_service(service)?;
        Self::from_host(host, port)
    }

    /// Parses a combined `host:port` string.
    ///
    /// IPv6 literals must be bracket-delimited (`[addr]:port`, optionally
    /// `[addr%scope]:port`). Malformed input — missing colon, unbalanced
    /// brackets, non-numeric port, port out of 16-bit range — fails with
    /// [`NetError::InvalidAddressFormat`] before anything else happens.
    ///
    /// Examples of accepted input:
    ///
    /// ```text
    /// 192.168.1.10:80
    /// [::ffff:192.168.1.120]:2040
    /// [fe80::1%3]:8080
    /// ```
    pub fn from_host_port(s: &str) -> Result<Self, NetError> {
        let (host, port) = split_host_port(s)?;
        let port: u16 = port
            .parse()
            .map_err(|_| NetError::InvalidAddressFormat(s.to_string()))?;
        Self::from_host(host, port).map_err(|_| NetError::InvalidAddressFormat(s.to_string()))
    }

    /// The host IP address.
    pub fn host(&self) -> IpAddr {
        match &self.repr {
            Repr::V4(sa) => IpAddr::V4(*sa.ip()),
            Repr::V6(sa) => IpAddr::V6(*sa.ip()),
        }
    }

    /// The port number, in host byte order.
    pub fn port(&self) -> u16 {
        match &self.repr {
            Repr::V4(sa) => sa.port(),
            Repr::V6(sa) => sa.port(),
        }
    }

    /// The address family.
    pub fn family(&self) -> AddressFamily {
        match &self.repr {
            Repr::V4(_) => AddressFamily::V4,
            Repr::V6(_) => AddressFamily::V6,
        }
    }

    /// The IPv6 scope id; zero for IPv4 endpoints and global addresses.
    pub fn scope_id(&self) -> u32 {
        match &self.repr {
            Repr::V4(_) => 0,
            Repr::V6(sa) => sa.scope_id(),
        }
    }

    /// Byte length of the native socket address representation for this
    /// endpoint's family.
    pub fn native_len(&self) -> usize {
        #[cfg(unix)]
        match &self.repr {
            Repr::V4(_) => std::mem::size_of::<libc::sockaddr_in>(),
            Repr::V6(_) => std::mem::size_of::<libc::sockaddr_in6>(),
        }
        #[cfg(not(unix))]
        match &self.repr {
            Repr::V4(_) => 16,
            Repr::V6(_) => 28,
        }
    }
}

impl Default for EndpointAddress {
    /// A wildcard IPv4 endpoint with port zero.
    fn default() -> Self {
        Self::wildcard(0)
    }
}

impl From<SocketAddr> for EndpointAddress {
    fn from(sa: SocketAddr) -> Self {
        let repr = match sa {
            SocketAddr::V4(v4) => Repr::V4(v4),
            SocketAddr::V6(v6) => Repr::V6(v6),
        };
        Self { repr }
    }
}

impl From<EndpointAddress> for SocketAddr {
    fn from(ep: EndpointAddress) -> Self {
        match ep.repr {
            Repr::V4(v4) => SocketAddr::V4(v4),
            Repr::V6(v6) => SocketAddr::V6(v6),
        }
    }
}

impl FromStr for EndpointAddress {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_host_port(s)
    }
}

impl PartialEq for EndpointAddress {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::V4(a), Repr::V4(b)) => a.ip() == b.ip() && a.port() == b.port(),
            // Scope id and flow info deliberately excluded.
            (Repr::V6(a), Repr::V6(b)) => a.ip() == b.ip() && a.port() == b.port(),
            _ => false,
        }
    }
}

impl Eq for EndpointAddress {}

impl Ord for EndpointAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.repr, &other.repr) {
            (Repr::V4(a), Repr::V4(b)) => a
                .ip()
                .octets()
                .cmp(&b.ip().octets())
                .then_with(|| a.port().cmp(&b.port())),
            (Repr::V6(a), Repr::V6(b)) => a
                .ip()
                .octets()
                .cmp(&b.ip().octets())
                .then_with(|| a.port().cmp(&b.port())),
            (Repr::V4(_), Repr::V6(_)) => Ordering::Less,
            (Repr::V6(_), Repr::V4(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for EndpointAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for EndpointAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family().hash(state);
        match &self.repr {
            Repr::V4(sa) => sa.ip().octets().hash(state),
            Repr::V6(sa) => sa.ip().octets().hash(state),
        }
        self.port().hash(state);
    }
}

impl fmt::Display for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::V4(sa) => write!(f, "{}:{}", sa.ip(), sa.port()),
            Repr::V6(sa) if sa.scope_id() != 0 => {
                write!(f, "[{}%{}]:{}", sa.ip(), sa.scope_id(), sa.port())
            }
            Repr::V6(sa) => write!(f, "[{}]:{}", sa.ip(), sa.port()),
        }
    }
}
