//! Tests for the bounded mutex

use david_application::BoundedMutex;
use david_domain::Error;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Spawn a thread that holds `mutex` for `hold` and signals once it owns it
fn hold_in_background(mutex: &Arc<BoundedMutex>, hold: Duration) -> thread::JoinHandle<()> {
    let (acquired_tx, acquired_rx) = mpsc::channel();
    let mutex = Arc::clone(mutex);
    let handle = thread::spawn(move || {
        let _guard = mutex.acquire().expect("holder should acquire a free mutex");
        acquired_tx.send(()).expect("signal acquisition");
        thread::sleep(hold);
    });
    acquired_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("holder thread should acquire the mutex");
    handle
}

#[test]
fn test_acquire_and_release_on_drop() {
    let mutex = BoundedMutex::new("drop");
    {
        let guard = mutex.acquire().expect("free mutex");
        assert!(guard.is_held());
        assert!(mutex.is_locked());
    }
    assert!(!mutex.is_locked());
    let _again = mutex.acquire().expect("mutex released by drop");
}

#[test]
fn test_recursion_fails_immediately() {
    let mutex = BoundedMutex::with_timeout_ms("recursive", 5_000);
    let _guard = mutex.acquire().expect("free mutex");

    let started = Instant::now();
    let err = mutex.acquire().expect_err("second acquisition on same thread");

    assert!(matches!(err, Error::LockRecursion { ref name } if name == "recursive"));
    assert!(started.elapsed() < Duration::from_millis(1_000));
    assert!(mutex.is_locked(), "failed recursion must not release the lock");
}

#[test]
fn test_timeout_elapses_not_earlier() {
    let mutex = Arc::new(BoundedMutex::with_timeout_ms("busy", 150));
    let holder = hold_in_background(&mutex, Duration::from_millis(1_500));

    let started = Instant::now();
    let err = mutex.acquire().expect_err("held by another thread");
    let elapsed = started.elapsed();

    assert!(
        matches!(err, Error::LockTimeout { ref name, timeout_ms: 150 } if name == "busy"),
        "unexpected error: {err}"
    );
    assert!(elapsed >= Duration::from_millis(150), "gave up early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(1_500), "waited too long: {elapsed:?}");

    holder.join().expect("holder thread");
}

#[test]
fn test_waiter_acquires_after_holder_releases() {
    let mutex = Arc::new(BoundedMutex::with_timeout_ms("handover", 5_000));
    let holder = hold_in_background(&mutex, Duration::from_millis(100));

    let guard = mutex.acquire().expect("holder releases before timeout");
    assert!(guard.is_held());

    drop(guard);
    holder.join().expect("holder thread");
}

#[test]
fn test_non_positive_timeout_waits_forever() {
    assert_eq!(BoundedMutex::with_timeout_ms("zero", 0).timeout(), None);
    assert_eq!(BoundedMutex::with_timeout_ms("negative", -7).timeout(), None);
    assert_eq!(
        BoundedMutex::new("default").timeout(),
        Some(Duration::from_millis(10_002))
    );

    let mutex = Arc::new(BoundedMutex::with_timeout_ms("forever", 0));
    let holder = hold_in_background(&mutex, Duration::from_millis(300));

    let started = Instant::now();
    let _guard = mutex.acquire().expect("infinite wait eventually succeeds");
    assert!(started.elapsed() >= Duration::from_millis(200));

    holder.join().expect("holder thread");
}

#[test]
fn test_release_is_idempotent() {
    let mutex = BoundedMutex::new("idempotent");
    let mut guard = mutex.acquire().expect("free mutex");

    guard.release();
    assert!(!guard.is_held());
    assert!(!mutex.is_locked());

    // A second owner must not be released by the stale guard
    let _other = mutex.acquire().expect("released mutex");
    guard.release();
    drop(guard);
    assert!(mutex.is_locked());
}

#[test]
fn test_try_acquire() {
    let mutex = Arc::new(BoundedMutex::new("try"));
    {
        let _guard = mutex.try_acquire().expect("free mutex");
        assert!(matches!(
            mutex.try_acquire(),
            Err(Error::LockRecursion { .. })
        ));
    }

    let holder = hold_in_background(&mutex, Duration::from_millis(300));
    assert!(matches!(
        mutex.try_acquire(),
        Err(Error::LockTimeout { timeout_ms: 0, .. })
    ));
    holder.join().expect("holder thread");
}

#[test]
fn test_released_when_holder_panics() {
    let mutex = Arc::new(BoundedMutex::with_timeout_ms("panicking", 1_000));
    let shared = Arc::clone(&mutex);

    let result = thread::spawn(move || {
        let _guard = shared.acquire().expect("free mutex");
        panic!("holder failed inside the critical section");
    })
    .join();

    assert!(result.is_err());
    assert!(!mutex.is_locked());
    let _guard = mutex.acquire().expect("released during unwind");
}
