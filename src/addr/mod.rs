//! Endpoint Addressing Module
//!
//! [`EndpointAddress`] represents an internet endpoint: an IPv4 or IPv6
//! host address plus a port number, selected at runtime but stored inline
//! as a plain `Copy` value. Construction is pure local validation — this
//! module never performs name resolution (that is the
//! [`Resolver`](crate::dns::Resolver)'s job) and never touches the
//! network, except for the explicit service-database lookup in
//! [`EndpointAddress::from_host_service`].
//!
//! # Example
//!
//! ```rust,ignore
//! use netbase::addr::EndpointAddress;
//!
//! let a: EndpointAddress = "192.168.1.10:80".parse()?;
//! let b: EndpointAddress = "[::ffff:192.168.1.120]:2040".parse()?;
//! assert!(a < b);
//! ```

pub mod endpoint;
pub(crate) mod parse;
mod service;

pub use endpoint::{AddressFamily, EndpointAddress};
