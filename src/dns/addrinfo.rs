//! System resolver backend using `getaddrinfo`/`getnameinfo`.
//!
//! This is the preferred strategy: it honors hint flags, handles IPv4 and
//! IPv6 uniformly, and reports classifiable `EAI_*` codes. Resolution
//! respects the system resolver configuration (/etc/resolv.conf etc.),
//! which can be re-read through `reload()`.

use crate::base::neterror::NetError;
use crate::dns::backend::{HintFlags, NameResolutionBackend};
use crate::dns::hostentry::HostEntry;
use std::ffi::{CStr, CString};
use std::io;
use std::mem;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ptr;

/// Size of the buffer handed to `getnameinfo`, matching `NI_MAXHOST`.
const FQDN_BUF_LEN: usize = 1025;

/// Resolver backend built on the modern address-info API.
///
/// Lookups through `getaddrinfo` are reentrant. On glibc Linux the process
/// additionally carries libresolv configuration state that `reload()`
/// rewrites with `res_init`, so lookups there must share the resolver's
/// read lock; everywhere else no locking is needed at this layer.
#[derive(Clone, Debug, Default)]
pub struct AddrInfoBackend;

impl AddrInfoBackend {
    /// Creates a new `AddrInfoBackend`.
    pub fn new() -> Self {
        Self
    }
}

impl NameResolutionBackend for AddrInfoBackend {
    fn lookup_host(&self, name: &str, flags: HintFlags) -> Result<HostEntry, NetError> {
        tracing::debug!(host = %name, "resolving via getaddrinfo");
        let c_name =
            CString::new(name).map_err(|_| NetError::InvalidAddressFormat(name.to_string()))?;

        let mut hints: libc::addrinfo = unsafe { mem::zeroed() };
        hints.ai_family = libc::AF_UNSPEC;
        // Always request the canonical name; assembling a HostEntry needs it.
        hints.ai_flags = to_ai_flags(flags) | libc::AI_CANONNAME;

        let mut head: *mut libc::addrinfo = ptr::null_mut();
        let rc = unsafe { libc::getaddrinfo(c_name.as_ptr(), ptr::null(), &hints, &mut head) };
        if rc != 0 {
            return Err(classify_gai(rc, name));
        }

        let entry = unsafe { entry_from_addrinfo(name, head) };
        unsafe { libc::freeaddrinfo(head) };
        tracing::debug!(host = %name, count = entry.addresses().len(), "resolution complete");
        Ok(entry)
    }

    fn lookup_name(&self, addr: &IpAddr) -> Result<String, NetError> {
        tracing::debug!(address = %addr, "reverse lookup via getnameinfo");
        let (storage, len) = sockaddr_from_ip(addr);
        let mut fqdn = [0 as libc::c_char; FQDN_BUF_LEN];

        // NI_NAMEREQD: the name must be found, not merely resolvable.
        let rc = unsafe {
            libc::getnameinfo(
                &storage as *const _ as *const libc::sockaddr,
                len,
                fqdn.as_mut_ptr(),
                fqdn.len() as libc::socklen_t,
                ptr::null_mut(),
                0,
                libc::NI_NAMEREQD,
            )
        };
        if rc != 0 {
            return Err(classify_gai(rc, &addr.to_string()));
        }

        let name = unsafe { CStr::from_ptr(fqdn.as_ptr()) };
        Ok(name.to_string_lossy().into_owned())
    }

    fn local_host_name(&self) -> Result<String, NetError> {
        let mut buf = [0 as libc::c_char; 256];
        let rc = unsafe { libc::gethostname(buf.as_mut_ptr(), buf.len()) };
        if rc != 0 {
            return Err(NetError::SystemResolverError {
                code: io::Error::last_os_error().raw_os_error().unwrap_or(0),
                arg: "hostname".to_string(),
            });
        }
        let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
        Ok(name.to_string_lossy().into_owned())
    }

    fn reload(&self) {
        #[cfg(all(target_os = "linux", target_env = "gnu"))]
        unsafe {
            libc::res_init();
        }
    }

    fn reentrant(&self) -> bool {
        // The libresolv state that reload() rewrites is process-global on
        // glibc; lookups there must exclude the writer.
        cfg!(not(all(target_os = "linux", target_env = "gnu")))
    }
}

fn to_ai_flags(flags: HintFlags) -> libc::c_int {
    let mut ai = 0;
    if flags.contains(HintFlags::PASSIVE) {
        ai |= libc::AI_PASSIVE;
    }
    if flags.contains(HintFlags::CANONICAL_NAME) {
        ai |= libc::AI_CANONNAME;
    }
    if flags.contains(HintFlags::NUMERIC_HOST) {
        ai |= libc::AI_NUMERICHOST;
    }
    if flags.contains(HintFlags::NUMERIC_SERVICE) {
        ai |= libc::AI_NUMERICSERV;
    }
    if flags.contains(HintFlags::V4_MAPPED) {
        ai |= libc::AI_V4MAPPED;
    }
    if flags.contains(HintFlags::ALL) {
        ai |= libc::AI_ALL;
    }
    if flags.contains(HintFlags::ADDR_CONFIG) {
        ai |= libc::AI_ADDRCONFIG;
    }
    ai
}

/// Maps a `getaddrinfo`/`getnameinfo` return code onto the error taxonomy.
fn classify_gai(code: libc::c_int, arg: &str) -> NetError {
    let arg = arg.to_string();
    match code {
        libc::EAI_AGAIN => NetError::TemporaryFailure(arg),
        libc::EAI_FAIL => NetError::NonRecoverableFailure(arg),
        #[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
        libc::EAI_NODATA => NetError::NoAddressFound(arg),
        libc::EAI_NONAME => NetError::HostNotFound(arg),
        libc::EAI_SYSTEM => {
            classify_system(io::Error::last_os_error().raw_os_error().unwrap_or(0), arg)
        }
        other => NetError::SystemResolverError { code: other, arg },
    }
}

/// Classifies the errno left behind by an `EAI_SYSTEM` failure.
fn classify_system(code: i32, arg: String) -> NetError {
    match code {
        libc::EAGAIN => NetError::TemporaryFailure(arg),
        code => NetError::SystemResolverError { code, arg },
    }
}

/// Walks a native `addrinfo` chain into a [`HostEntry`].
///
/// The chain repeats each address once per socket type; duplicates are
/// suppressed. The canonical name comes from the first entry carrying one
/// (glibc only fills it on the head entry), falling back to the query.
///
/// # Safety
///
/// `head` must be a chain returned by `getaddrinfo`, not yet freed.
unsafe fn entry_from_addrinfo(query: &str, head: *const libc::addrinfo) -> HostEntry {
    let mut entry = HostEntry::new(query, Vec::new(), Vec::new());
    let mut ai = head;
    while !ai.is_null() {
        let item = &*ai;
        if entry.canonical_name() == query && !item.ai_canonname.is_null() {
            let canonical = CStr::from_ptr(item.ai_canonname).to_string_lossy();
            entry.set_canonical_name(canonical.into_owned());
        }
        match item.ai_family {
            libc::AF_INET if item.ai_addrlen as usize >= mem::size_of::<libc::sockaddr_in>() => {
                let sin = &*(item.ai_addr as *const libc::sockaddr_in);
                let octets = u32::from_be(sin.sin_addr.s_addr);
                entry.push_unique(IpAddr::V4(Ipv4Addr::from(octets)));
            }
            libc::AF_INET6 if item.ai_addrlen as usize >= mem::size_of::<libc::sockaddr_in6>() => {
                let sin6 = &*(item.ai_addr as *const libc::sockaddr_in6);
                entry.push_unique(IpAddr::V6(Ipv6Addr::from(sin6.sin6_addr.s6_addr)));
            }
            _ => {}
        }
        ai = item.ai_next;
    }
    entry
}

/// Builds the native socket address `getnameinfo` expects, port zero.
fn sockaddr_from_ip(addr: &IpAddr) -> (libc::sockaddr_storage, libc::socklen_t) {
    let mut storage: libc::sockaddr_storage = unsafe { mem::zeroed() };
    match addr {
        IpAddr::V4(v4) => {
            let sin = &mut storage as *mut _ as *mut libc::sockaddr_in;
            unsafe {
                (*sin).sin_family = libc::AF_INET as libc::sa_family_t;
                (*sin).sin_addr = libc::in_addr {
                    s_addr: u32::from(*v4).to_be(),
                };
            }
            (storage, mem::size_of::<libc::sockaddr_in>() as libc::socklen_t)
        }
        IpAddr::V6(v6) => {
            let sin6 = &mut storage as *mut _ as *mut libc::sockaddr_in6;
            unsafe {
                (*sin6).sin6_family = libc::AF_INET6 as libc::sa_family_t;
                (*sin6).sin6_addr = libc::in6_addr {
                    s6_addr: v6.octets(),
                };
            }
            (storage, mem::size_of::<libc::sockaddr_in6>() as libc::socklen_t)
        }
    }
}
