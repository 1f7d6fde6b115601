//! Base types and error handling.
//!
//! Provides the foundational pieces shared by the resolver and the address
//! types:
//! - [`neterror::NetError`]: classified resolution/addressing errors

pub mod neterror;
