//! # netbase
//!
//! A portable name-resolution and endpoint-addressing core.
//!
//! `netbase` gives transport-layer code (streams, listeners, datagram
//! sockets) a uniform way to turn host names and IP literals into usable
//! endpoints, without tying callers to the shape of any one platform
//! resolver API.
//!
//! ## Components
//!
//! - [`dns::Resolver`] — synchronous façade over the platform's name
//!   resolution facility. Forward, reverse, and literal-aware lookups all
//!   produce the same normalized [`dns::HostEntry`] shape, and platform
//!   error codes are collapsed into one classified taxonomy
//!   ([`base::neterror::NetError`]).
//! - [`addr::EndpointAddress`] — a compact, copyable {IP address, port}
//!   value that selects its IPv4 or IPv6 representation at runtime, with a
//!   documented total order and exact string rendering.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use netbase::addr::EndpointAddress;
//! use netbase::dns::Resolver;
//!
//! let resolver = Resolver::system();
//! let ip = resolver.resolve_one("localhost")?;
//! let endpoint = EndpointAddress::new(ip, 8080);
//! println!("connecting to {endpoint}");
//! ```
//!
//! ## Scope
//!
//! This crate performs no socket I/O: it resolves and represents addresses,
//! nothing more. Calls block for the duration of the underlying resolver
//! round-trip, are attempted exactly once, and surface every failure as a
//! classified error so a calling layer can decide whether to retry.

pub mod addr;
pub mod base;
pub mod dns;

pub use addr::{AddressFamily, EndpointAddress};
pub use base::neterror::NetError;
pub use dns::{HostEntry, Resolver};
