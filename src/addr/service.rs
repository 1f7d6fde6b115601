//! Service-name to port mapping via the platform service database.

use crate::base::neterror::NetError;

/// Maps a service string to a port number.
///
/// Numeric strings are used directly; anything else is looked up in the
/// platform's service database and fails with
/// [`NetError::ServiceNotFound`] when unmapped (or on targets without a
/// service database).
pub(crate) fn resolve_service(service: &str) -> Result<u16, NetError> {
    if let Ok(port) = service.parse::<u16>() {
        return Ok(port);
    }
    lookup_service(service)
}

#[cfg(unix)]
fn lookup_service(service: &str) -> Result<u16, NetError> {
    use std::ffi::CString;
    use std::sync::{Mutex, PoisonError};

    // getservbyname returns a pointer into library-global storage.
    static DB_LOCK: Mutex<()> = Mutex::new(());

    let c_name =
        CString::new(service).map_err(|_| NetError::ServiceNotFound(service.to_string()))?;
    let _db = DB_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let se = unsafe { libc::getservbyname(c_name.as_ptr(), std::ptr::null()) };
    if se.is_null() {
        return Err(NetError::ServiceNotFound(service.to_string()));
    }
    // s_port is kept in network byte order.
    Ok(u16::from_be(unsafe { (*se).s_port } as u16))
}

#[cfg(not(unix))]
fn lookup_service(service: &str) -> Result<u16, NetError> {
    Err(NetError::ServiceNotFound(service.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_service() {
        assert_eq!(resolve_service("8080").unwrap(), 8080);
        assert_eq!(resolve_service("0").unwrap(), 0);
        assert_eq!(resolve_service("65535").unwrap(), 65535);
    }

    #[test]
    fn test_unknown_service_fails() {
        let err = resolve_service("no-such-service-zzz").unwrap_err();
        assert!(matches!(err, NetError::ServiceNotFound(_)));
    }

    #[test]
    fn test_out_of_range_numeric_falls_through_to_database() {
        // 65536 is not a valid port, so it is treated as a service name.
        let err = resolve_service("65536").unwrap_err();
        assert!(matches!(err, NetError::ServiceNotFound(_)));
    }
}
