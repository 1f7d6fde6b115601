//! Minimal backend for embedded-class targets.
//!
//! Models resolver facilities that only offer name-to-single-address
//! lookup: one address per query, the canonical name echoes the query, no
//! alias records, and no reverse lookup. Also serves as the fallback on
//! targets without the native unix resolver APIs, layered over the
//! standard library's resolution entry point.

use crate::base::neterror::NetError;
use crate::dns::backend::{HintFlags, NameResolutionBackend};
use crate::dns::hostentry::HostEntry;
use std::net::{IpAddr, ToSocketAddrs};

/// Name-to-single-address resolver backend.
///
/// [`HintFlags`] are accepted and ignored; the underlying facility has no
/// hint mechanism.
#[derive(Clone, Debug, Default)]
pub struct MinimalBackend;

impl MinimalBackend {
    /// Creates a new `MinimalBackend`.
    pub fn new() -> Self {
        Self
    }
}

impl NameResolutionBackend for MinimalBackend {
    fn lookup_host(&self, name: &str, _flags: HintFlags) -> Result<HostEntry, NetError> {
        tracing::debug!(host = %name, "resolving via minimal backend");
        let mut iter = (name, 0u16).to_socket_addrs().map_err(|e| {
            match e.raw_os_error() {
                Some(code) => NetError::SystemResolverError {
                    code,
                    arg: name.to_string(),
                },
                // The standard entry point folds resolver failures into an
                // opaque error; without a code, not-found is the only
                // classification this facility can support.
                None => NetError::HostNotFound(name.to_string()),
            }
        })?;

        match iter.next() {
            Some(sa) => Ok(HostEntry::new(name, Vec::new(), vec![sa.ip()])),
            None => Err(NetError::NoAddressFound(name.to_string())),
        }
    }

    fn lookup_name(&self, addr: &IpAddr) -> Result<String, NetError> {
        // No reverse facility can honor the name-required constraint here;
        // report the incapability instead of weakening the guarantee.
        Err(NetError::NonRecoverableFailure(addr.to_string()))
    }

    fn local_host_name(&self) -> Result<String, NetError> {
        std::env::var("HOSTNAME")
            .or_else(|_| std::env::var("COMPUTERNAME"))
            .map_err(|_| NetError::SystemResolverError {
                code: 0,
                arg: "hostname".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_address_shape() {
        let backend = MinimalBackend::new();
        let entry = backend
            .lookup_host("localhost", HintFlags::empty())
            .expect("localhost should always resolve");
        assert_eq!(entry.canonical_name(), "localhost");
        assert!(entry.aliases().is_empty());
        assert_eq!(entry.addresses().len(), 1);
    }

    #[test]
    fn test_reverse_lookup_unsupported() {
        let backend = MinimalBackend::new();
        let err = backend
            .lookup_name(&IpAddr::V4(std::net::Ipv4Addr::LOCALHOST))
            .unwrap_err();
        assert!(matches!(err, NetError::NonRecoverableFailure(_)));
    }

    #[test]
    fn test_reentrant_by_default() {
        assert!(MinimalBackend::new().reentrant());
    }
}
