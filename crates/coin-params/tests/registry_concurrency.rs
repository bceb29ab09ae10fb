//! Concurrent first-time registration

use coin_params::params::{BITCOIN_MAIN_NET_PARAMS, BITCOIN_TEST_NET3_PARAMS};
use coin_params::NetworkRegistry;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_register_if_absent() {
    const THREADS: usize = 16;

    let registry = Arc::new(NetworkRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.register_if_absent(&[&BITCOIN_MAIN_NET_PARAMS, &BITCOIN_TEST_NET3_PARAMS])
            })
        })
        .collect();

    let mut performed = 0;
    for handle in handles {
        let result = handle.join().unwrap();
        if result.unwrap() {
            performed += 1;
        }
    }

    assert_eq!(performed, 1);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_global_registry_is_shared() {
    let a = NetworkRegistry::global();
    let b = NetworkRegistry::global();
    assert!(std::ptr::eq(a, b));
}
