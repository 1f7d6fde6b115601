//! Name Resolution Module
//!
//! A synchronous, stateless façade over the platform's name-resolution
//! facility. Three backend strategies exist, selected at build time through
//! cargo features:
//!
//! - [`AddrInfoBackend`] — `getaddrinfo`-style, hint flags, both families
//!   (the preferred path; feature `backend-addrinfo`, on by default)
//! - [`LegacyBackend`] — `gethostbyname`-style, single-family, no hint
//!   flags, serialized access (feature `backend-legacy`)
//! - [`MinimalBackend`] — embedded-target style, name to a single address,
//!   no reverse lookup (feature `backend-minimal`, and the fallback on
//!   targets without the native APIs)
//!
//! All three collapse to the same [`HostEntry`] shape and the same error
//! taxonomy, so callers never branch on platform. [`SystemBackend`] is the
//! build-selected concrete type; tests inject fakes through
//! [`NameResolutionBackend`] instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use netbase::dns::Resolver;
//!
//! let resolver = Resolver::system();
//! let entry = resolver.resolve("localhost")?;
//! for ip in entry.addresses() {
//!     println!("resolved: {ip}");
//! }
//! ```

mod backend;
mod hostentry;
mod resolver;

#[cfg(unix)]
mod addrinfo;
#[cfg(unix)]
mod legacy;
mod minimal;

pub use backend::{HintFlags, NameResolutionBackend};
pub use hostentry::HostEntry;
pub use resolver::Resolver;

#[cfg(unix)]
pub use addrinfo::AddrInfoBackend;
#[cfg(unix)]
pub use legacy::LegacyBackend;
pub use minimal::MinimalBackend;

/// The resolver backend selected at build configuration time.
///
/// Exactly one strategy is active per build; when several backend features
/// are enabled the precedence is legacy > addrinfo > minimal.
#[cfg(all(unix, feature = "backend-legacy"))]
pub type SystemBackend = LegacyBackend;

#[cfg(all(unix, feature = "backend-addrinfo", not(feature = "backend-legacy")))]
pub type SystemBackend = AddrInfoBackend;

#[cfg(any(
    not(unix),
    all(not(feature = "backend-addrinfo"), not(feature = "backend-legacy"))
))]
pub type SystemBackend = MinimalBackend;
