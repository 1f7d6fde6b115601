//! Legacy host-entry backend using `gethostbyname`/`gethostbyaddr`.
//!
//! Used where the address-info API is unavailable. The legacy calls return
//! pointers into library-global storage and are not reentrant, so this
//! backend always requests serialization from the resolver: lookups share
//! the read lock, `reload()` takes the write lock.

use crate::base::neterror::NetError;
use crate::dns::backend::{HintFlags, NameResolutionBackend};
use crate::dns::hostentry::HostEntry;
use std::ffi::{CStr, CString};
use std::io;
use std::mem;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ptr;

// The legacy host-entry functions are not bound by the `libc` crate; declare
// them directly against the platform C library.
extern "C" {
    fn gethostbyname(name: *const libc::c_char) -> *mut libc::hostent;
    fn gethostbyaddr(
        addr: *const libc::c_void,
        len: libc::socklen_t,
        type_: libc::c_int,
    ) -> *mut libc::hostent;
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    fn __h_errno_location() -> *mut libc::c_int;
}

// h_errno values from <netdb.h>; identical across unix platforms.
const HOST_NOT_FOUND: i32 = 1;
const TRY_AGAIN: i32 = 2;
const NO_RECOVERY: i32 = 3;
const NO_DATA: i32 = 4;

/// Resolver backend built on the legacy host-entry API.
///
/// Single result set per call, no hint flags ([`HintFlags`] are accepted
/// and ignored), h_errno-based error reporting.
#[derive(Clone, Debug, Default)]
pub struct LegacyBackend;

impl LegacyBackend {
    /// Creates a new `LegacyBackend`.
    pub fn new() -> Self {
        Self
    }
}

impl NameResolutionBackend for LegacyBackend {
    fn lookup_host(&self, name: &str, _flags: HintFlags) -> Result<HostEntry, NetError> {
        tracing::debug!(host = %name, "resolving via gethostbyname");
        let c_name =
            CString::new(name).map_err(|_| NetError::InvalidAddressFormat(name.to_string()))?;

        let he = unsafe { gethostbyname(c_name.as_ptr()) };
        if he.is_null() {
            return Err(classify_herrno(last_h_errno(), name));
        }
        Ok(unsafe { entry_from_hostent(he) })
    }

    fn lookup_name(&self, addr: &IpAddr) -> Result<String, NetError> {
        tracing::debug!(address = %addr, "reverse lookup via gethostbyaddr");
        let he = match addr {
            IpAddr::V4(v4) => {
                let raw = libc::in_addr {
                    s_addr: u32::from(*v4).to_be(),
                };
                unsafe {
                    gethostbyaddr(
                        &raw as *const _ as *const libc::c_void,
                        mem::size_of::<libc::in_addr>() as libc::socklen_t,
                        libc::AF_INET,
                    )
                }
            }
            IpAddr::V6(v6) => {
                let raw = libc::in6_addr {
                    s6_addr: v6.octets(),
                };
                unsafe {
                    gethostbyaddr(
                        &raw as *const _ as *const libc::c_void,
                        mem::size_of::<libc::in6_addr>() as libc::socklen_t,
                        libc::AF_INET6,
                    )
                }
            }
        };
        if he.is_null() {
            return Err(classify_herrno(last_h_errno(), &addr.to_string()));
        }
        let name = unsafe { CStr::from_ptr((*he).h_name) };
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
        false
    }
}

fn last_h_errno() -> i32 {
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    unsafe {
        *__h_errno_location()
    }
    // Without a portable h_errno the cause is unknowable; the classifier's
    // default arm wraps the zero code.
    #[cfg(not(all(target_os = "linux", target_env = "gnu")))]
    {
        0
    }
}

/// Maps an h_errno value onto the error taxonomy.
fn classify_herrno(code: i32, arg: &str) -> NetError {
    let arg = arg.to_string();
    match code {
        HOST_NOT_FOUND => NetError::HostNotFound(arg),
        TRY_AGAIN => NetError::TemporaryFailure(arg),
        NO_RECOVERY => NetError::NonRecoverableFailure(arg),
        NO_DATA => NetError::NoAddressFound(arg),
        code => NetError::SystemResolverError { code, arg },
    }
}

/// Copies a library-global `hostent` into an owned [`HostEntry`].
///
/// # Safety
///
/// `he` must be the non-null result of a legacy lookup, and the caller must
/// hold whatever serialization keeps the global storage stable.
unsafe fn entry_from_hostent(he: *const libc::hostent) -> HostEntry {
    let h = &*he;
    let canonical = CStr::from_ptr(h.h_name).to_string_lossy().into_owned();

    let mut aliases = Vec::new();
    let mut alias = h.h_aliases;
    while !alias.is_null() && !(*alias).is_null() {
        aliases.push(CStr::from_ptr(*alias).to_string_lossy().into_owned());
        alias = alias.add(1);
    }

    let mut entry = HostEntry::new(canonical, aliases, Vec::new());
    let mut list = h.h_addr_list;
    while !list.is_null() && !(*list).is_null() {
        match h.h_addrtype {
            libc::AF_INET if h.h_length == 4 => {
                let mut octets = [0u8; 4];
                ptr::copy_nonoverlapping(*list as *const u8, octets.as_mut_ptr(), 4);
                entry.push_unique(IpAddr::V4(Ipv4Addr::from(octets)));
            }
            libc::AF_INET6 if h.h_length == 16 => {
                let mut octets = [0u8; 16];
                ptr::copy_nonoverlapping(*list as *const u8, octets.as_mut_ptr(), 16);
                entry.push_unique(IpAddr::V6(Ipv6Addr::from(octets)));
            }
            _ => {}
        }
        list = list.add(1);
    }
    entry
}
