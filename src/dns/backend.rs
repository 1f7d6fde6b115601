//! The capability interface implemented by every resolver backend.

use crate::base::neterror::NetError;
use crate::dns::hostentry::HostEntry;
use std::net::IpAddr;

bitflags::bitflags! {
    /// Resolution hint flags.
    ///
    /// These abstract the `AI_*` hint constants of `getaddrinfo`; the
    /// addrinfo backend maps them to the native values, other backends
    /// ignore them (legacy and embedded resolvers have no hint mechanism).
    pub struct HintFlags: u32 {
        /// Returned addresses are intended for `bind`.
        const PASSIVE = 0x01;
        /// Request the canonical name of the host.
        const CANONICAL_NAME = 0x02;
        /// The query is a numeric literal; perform no resolution.
        const NUMERIC_HOST = 0x04;
        /// The service is a numeric port string; skip the service database.
        const NUMERIC_SERVICE = 0x08;
        /// Return IPv4-mapped IPv6 addresses when no native IPv6 records
        /// exist.
        const V4_MAPPED = 0x10;
        /// Combined with `V4_MAPPED`: return both mapped and native
        /// addresses.
        const ALL = 0x20;
        /// Only return families for which the host has a configured
        /// address.
        const ADDR_CONFIG = 0x40;
    }
}

impl Default for HintFlags {
    fn default() -> Self {
        HintFlags::empty()
    }
}

/// One platform name-resolution strategy.
///
/// Implementations are selected at build configuration time (see
/// [`SystemBackend`](crate::dns::SystemBackend)); tests substitute fakes.
/// Each backend owns the mapping from its native error codes to the
/// [`NetError`] taxonomy — call sites never classify.
///
/// All methods block the calling thread for the duration of the underlying
/// round-trip and are attempted exactly once.
pub trait NameResolutionBackend: Send + Sync {
    /// Forward lookup: resolve `name` into a full [`HostEntry`].
    fn lookup_host(&self, name: &str, flags: HintFlags) -> Result<HostEntry, NetError>;

    /// Reverse lookup step: obtain the fully-qualified name for `addr`.
    ///
    /// The name must actually be found, not merely be resolvable (the
    /// `NI_NAMEREQD` constraint). A backend that cannot express this
    /// constraint reports [`NetError::NonRecoverableFailure`] instead of
    /// silently weakening the guarantee.
    fn lookup_name(&self, addr: &IpAddr) -> Result<String, NetError>;

    /// This machine's configured host name.
    fn local_host_name(&self) -> Result<String, NetError>;

    /// Re-reads any cached resolver configuration. No-op on backends
    /// without such state. Called by the resolver under exclusive access.
    fn reload(&self) {}

    /// Whether lookups on this backend are safe without the shared
    /// read-write guard.
    ///
    /// Non-reentrant backends get readers-concurrent/writer-exclusive
    /// serialization from the [`Resolver`](crate::dns::Resolver): lookups
    /// share a read lock, [`reload`](Self::reload) takes the write lock.
    /// Reentrant backends are called with no lock at all.
    fn reentrant(&self) -> bool {
        true
    }
}
