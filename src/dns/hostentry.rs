//! Normalized result of a name or address resolution.

use std::net::IpAddr;

/// The result of a host resolution: canonical name, alias names, and the
/// resolved IP addresses.
///
/// A `HostEntry` is immutable after construction and owned solely by the
/// caller that received it. Address order is whatever the backend reported;
/// on success the address list is non-empty for every shipped backend, but
/// callers selecting an address must still treat an empty list as
/// [`NoAddressFound`](crate::NetError::NoAddressFound) — some platform
/// resolvers "succeed" with zero usable records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    canonical_name: String,
    aliases: Vec<String>,
    addresses: Vec<IpAddr>,
}

impl HostEntry {
    /// Assembles an entry from already-normalized parts.
    pub fn new(
        canonical_name: impl Into<String>,
        aliases: Vec<String>,
        addresses: Vec<IpAddr>,
    ) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            aliases,
            addresses,
        }
    }

    /// The fully-qualified canonical name reported by the resolver.
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Alias names, in resolver order. Often empty.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Resolved addresses, in resolver order.
    pub fn addresses(&self) -> &[IpAddr] {
        &self.addresses
    }

    /// Replaces the canonical name while a backend assembles the entry.
    pub(crate) fn set_canonical_name(&mut self, name: String) {
        self.canonical_name = name;
    }

    /// Appends an address unless it is already present.
    ///
    /// Native `addrinfo` chains repeat each address once per socket type;
    /// backends use this while assembling the list to suppress those
    /// duplicates.
    pub(crate) fn push_unique(&mut self, addr: IpAddr) {
        if !self.addresses.contains(&addr) {
            self.addresses.push(addr);
        }
    }
}
