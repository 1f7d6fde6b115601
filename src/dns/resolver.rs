//! The resolution façade handed to transport-layer callers.

use crate::addr::parse::parse_ip_literal;
use crate::base::neterror::NetError;
use crate::dns::backend::{HintFlags, NameResolutionBackend};
use crate::dns::hostentry::HostEntry;
use crate::dns::SystemBackend;
use std::net::IpAddr;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

/// Stateless façade over a name-resolution backend.
///
/// `Resolver` owns no caches and never retries: every call maps to exactly
/// one backend attempt, blocks for the duration of the underlying
/// round-trip, and surfaces failures as classified [`NetError`]s so that
/// the calling layer can decide on retry policy.
///
/// The default backend is the build-selected [`SystemBackend`]; tests and
/// embedders may inject any [`NameResolutionBackend`] instead. When the
/// backend declares itself non-reentrant, lookups share a read lock and
/// [`reload`](Resolver::reload) takes the write lock, so concurrent
/// resolutions proceed in parallel while configuration rewrites are
/// exclusive. Reentrant backends are called without any locking.
#[derive(Debug, Default)]
pub struct Resolver<B = SystemBackend> {
    backend: B,
    guard: RwLock<()>,
}

impl Resolver<SystemBackend> {
    /// Creates a resolver over the build-selected platform backend.
    pub fn system() -> Self {
        Self::with_backend(SystemBackend::default())
    }
}

impl<B: NameResolutionBackend> Resolver<B> {
    /// Creates a resolver over an explicit backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            guard: RwLock::new(()),
        }
    }

    /// The injected backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Forward lookup: resolves `name` into a [`HostEntry`].
    pub fn host_by_name(&self, name: &str, flags: HintFlags) -> Result<HostEntry, NetError> {
        let _shared = self.shared();
        self.backend.lookup_host(name, flags)
    }

    /// Reverse lookup: resolves `address` into a [`HostEntry`].
    ///
    /// First obtains the fully-qualified name for the address (the name
    /// must be found, not merely resolvable), then re-resolves that name
    /// forward to assemble the full entry. Either step's classified error
    /// propagates as-is, so callers see the true cause.
    pub fn host_by_address(&self, address: IpAddr, flags: HintFlags) -> Result<HostEntry, NetError> {
        let _shared = self.shared();
        let fqdn = self.backend.lookup_name(&address)?;
        self.backend.lookup_host(&fqdn, flags)
    }

    /// Resolves a host name or IP literal.
    ///
    /// A string that parses as an IP literal (including scoped IPv6
    /// literals) is always treated as an address and reverse-resolved,
    /// never as a host name.
    pub fn resolve(&self, address: &str) -> Result<HostEntry, NetError> {
        match parse_ip_literal(address) {
            Some((ip, _scope)) => self.host_by_address(ip, HintFlags::empty()),
            None => self.host_by_name(address, HintFlags::empty()),
        }
    }

    /// Resolves `address` and returns the first resolved IP.
    ///
    /// Fails with [`NetError::NoAddressFound`] when resolution succeeds
    /// with an empty address list — distinct from the host not resolving
    /// at all.
    pub fn resolve_one(&self, address: &str) -> Result<IpAddr, NetError> {
        let entry = self.resolve(address)?;
        entry
            .addresses()
            .first()
            .copied()
            .ok_or_else(|| NetError::NoAddressFound(address.to_string()))
    }

    /// Resolves the local machine's own host name.
    pub fn this_host(&self) -> Result<HostEntry, NetError> {
        let name = self.host_name()?;
        self.host_by_name(&name, HintFlags::empty())
    }

    /// This machine's configured host name.
    pub fn host_name(&self) -> Result<String, NetError> {
        self.backend.local_host_name()
    }

    /// Re-reads system resolver configuration, excluding all in-flight
    /// lookups on non-reentrant backends. No-op on backends without
    /// refreshable state.
    pub fn reload(&self) {
        let _exclusive = self.guard.write().unwrap_or_else(PoisonError::into_inner);
        self.backend.reload();
    }

    /// Contract point for a future cache layer. Guaranteed no-op today,
    /// never an error.
    pub fn flush_cache(&self) {}

    fn shared(&self) -> Option<RwLockReadGuard<'_, ()>> {
        if self.backend.reentrant() {
            None
        } else {
            Some(self.guard.read().unwrap_or_else(PoisonError::into_inner))
        }
    }
}
