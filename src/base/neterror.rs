use thiserror::Error;

/// Classified name-resolution and address-construction errors.
///
/// Every fallible operation in this crate reports exactly one of these
/// kinds. The classification exists so that calling layers can make policy
/// decisions (retry, fall back, give up) without inspecting platform error
/// codes; this crate itself never retries.
///
/// The `String` payload carries the host name, address literal, or service
/// name the operation was given, for diagnostics only — it does not
/// participate in classification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetError {
    /// The name does not exist.
    #[error("host not found: {0}")]
    HostNotFound(String),

    /// The name exists but has no usable address records, or the resolved
    /// address list was empty at selection time.
    #[error("no address found for {0}")]
    NoAddressFound(String),

    /// Transient resolver condition. The caller may retry; this crate will
    /// not.
    #[error("temporary failure resolving {0}")]
    TemporaryFailure(String),

    /// Permanent resolver-side fault, including reverse lookups on a
    /// backend that cannot honor the name-required constraint.
    #[error("non-recoverable failure resolving {0}")]
    NonRecoverableFailure(String),

    /// A textual service name has no port mapping in the platform's
    /// service database.
    #[error("service not found: {0}")]
    ServiceNotFound(String),

    /// Malformed address literal or combined host:port string. Detected by
    /// local validation before any resolver call is made.
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),

    /// Any platform error code not covered by the kinds above, with the
    /// raw numeric code preserved for diagnostics.
    #[error("system resolver error {code} resolving {arg}")]
    SystemResolverError { code: i32, arg: String },
}

impl NetError {
    /// Returns true for conditions a calling layer may reasonably retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, NetError::TemporaryFailure(_))
    }

    /// Returns the raw platform error code, if this error wraps one.
    pub fn raw_code(&self) -> Option<i32> {
        match self {
            NetError::SystemResolverError { code, .. } => Some(*code),
            _ => None,
        }
    }
}
