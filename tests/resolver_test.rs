//! Resolver Concurrency Tests
//!
//! Covers the locking discipline of `Resolver`:
//! - reentrant backends: lookups run with no shared lock at all
//! - non-reentrant backends: lookups are concurrent with each other but
//!   never interleave with `reload()`

use netbase::dns::{HintFlags, NameResolutionBackend, Resolver};
use netbase::{HostEntry, NetError};

use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const LOOPBACK: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

fn canned_entry(name: &str) -> HostEntry {
    HostEntry::new(name, vec![], vec![LOOPBACK])
}

/// Backend whose lookups rendezvous on a barrier. A lookup only returns
/// once `parties` lookups are in flight simultaneously, so any test using
/// it hangs if the resolver serializes reads.
struct RendezvousBackend {
    barrier: Barrier,
    reentrant: bool,
}

impl RendezvousBackend {
    fn new(parties: usize, reentrant: bool) -> Self {
        Self {
            barrier: Barrier::new(parties),
            reentrant,
        }
    }
}

impl NameResolutionBackend for RendezvousBackend {
    fn lookup_host(&self, name: &str, _flags: HintFlags) -> Result<HostEntry, NetError> {
        self.barrier.wait();
        Ok(canned_entry(name))
    }

    fn lookup_name(&self, addr: &IpAddr) -> Result<String, NetError> {
        Err(NetError::HostNotFound(addr.to_string()))
    }

    fn local_host_name(&self) -> Result<String, NetError> {
        Ok("rendezvous.test".to_string())
    }

    fn reentrant(&self) -> bool {
        self.reentrant
    }
}

/// Backend that records reader/writer overlap through atomics.
struct InstrumentedBackend {
    active_readers: AtomicUsize,
    active_writers: AtomicUsize,
    interleaved: AtomicBool,
}

impl InstrumentedBackend {
    fn new() -> Self {
        Self {
            active_readers: AtomicUsize::new(0),
            active_writers: AtomicUsize::new(0),
            interleaved: AtomicBool::new(false),
        }
    }
}

impl NameResolutionBackend for InstrumentedBackend {
    fn lookup_host(&self, name: &str, _flags: HintFlags) -> Result<HostEntry, NetError> {
        self.active_readers.fetch_add(1, Ordering::SeqCst);
        if self.active_writers.load(Ordering::SeqCst) > 0 {
            self.interleaved.store(true, Ordering::SeqCst);
        }
        thread::sleep(Duration::from_millis(1));
        self.active_readers.fetch_sub(1, Ordering::SeqCst);
        Ok(canned_entry(name))
    }

    fn lookup_name(&self, addr: &IpAddr) -> Result<String, NetError> {
        Err(NetError::HostNotFound(addr.to_string()))
    }

    fn local_host_name(&self) -> Result<String, NetError> {
        Ok("instrumented.test".to_string())
    }

    fn reload(&self) {
        self.active_writers.fetch_add(1, Ordering::SeqCst);
        if self.active_readers.load(Ordering::SeqCst) > 0
            || self.active_writers.load(Ordering::SeqCst) > 1
        {
            self.interleaved.store(true, Ordering::SeqCst);
        }
        thread::sleep(Duration::from_millis(1));
        self.active_writers.fetch_sub(1, Ordering::SeqCst);
    }

    fn reentrant(&self) -> bool {
        false
    }
}

#[test]
fn test_reentrant_lookups_run_unlocked_in_parallel() {
    const THREADS: usize = 4;
    let resolver = Arc::new(Resolver::with_backend(RendezvousBackend::new(
        THREADS, true,
    )));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let entry = resolver
                    .host_by_name(&format!("host-{i}.test"), HintFlags::empty())
                    .unwrap();
                assert_eq!(entry.addresses(), &[LOOPBACK]);
            })
        })
        .collect();

    // Hangs here if lookups were serialized behind a shared lock.
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_non_reentrant_lookups_share_the_read_side() {
    // Readers on a non-reentrant backend hold the read lock; they must
    // still be concurrent with each other.
    const THREADS: usize = 3;
    let resolver = Arc::new(Resolver::with_backend(RendezvousBackend::new(
        THREADS, false,
    )));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                resolver
                    .host_by_name("reader.test", HintFlags::empty())
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_reload_never_interleaves_with_lookups() {
    let resolver = Arc::new(Resolver::with_backend(InstrumentedBackend::new()));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                for _ in 0..25 {
                    resolver
                        .host_by_name("hammer.test", HintFlags::empty())
                        .unwrap();
                }
            })
        })
        .collect();

    let writer = {
        let resolver = Arc::clone(&resolver);
        thread::spawn(move || {
            for _ in 0..25 {
                resolver.reload();
            }
        })
    };

    for handle in readers {
        handle.join().unwrap();
    }
    writer.join().unwrap();

    assert!(
        !resolver.backend().interleaved.load(Ordering::SeqCst),
        "a reload interleaved with an in-flight lookup"
    );
}
