//! Bounded mutex
//!
//! Alternative to a plain mutex for guarding one-time initialization: waiting
//! ends with [`Error::LockTimeout`] after the configured timeout, and a thread
//! that already holds the lock gets [`Error::LockRecursion`] instead of a
//! silent deadlock.
//!
//! The mutex protects no data of its own. Callers use the guard to serialize
//! a critical section, typically a check-lock-check initialization.

use david_domain::constants::DEFAULT_LOCK_TIMEOUT_MS;
use david_domain::error::{Error, Result};
use std::marker::PhantomData;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

/// Non-reentrant mutex with a timeout
///
/// # Example
///
/// ```
/// use david_application::BoundedMutex;
///
/// let mutex = BoundedMutex::new("example");
/// {
///     let _guard = mutex.acquire().unwrap();
///     assert!(mutex.is_locked());
///     // same thread again: fails fast
///     assert!(mutex.acquire().is_err());
/// }
/// assert!(!mutex.is_locked());
/// ```
#[derive(Debug)]
pub struct BoundedMutex {
    name: String,
    timeout: Option<Duration>,
    owner: Mutex<Option<ThreadId>>,
    released: Condvar,
}

impl BoundedMutex {
    /// Mutex with the default timeout
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_timeout_ms(name, DEFAULT_LOCK_TIMEOUT_MS)
    }

    /// Mutex with a timeout in milliseconds; zero or negative waits forever
    pub fn with_timeout_ms<S: Into<String>>(name: S, timeout_ms: i64) -> Self {
        let timeout = u64::try_from(timeout_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);
        Self::with_timeout(name, timeout)
    }

    /// Mutex with an explicit timeout, `None` waits forever
    pub fn with_timeout<S: Into<String>>(name: S, timeout: Option<Duration>) -> Self {
        Self {
            name: name.into(),
            timeout,
            owner: Mutex::new(None),
            released: Condvar::new(),
        }
    }

    /// Name used in error messages
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured timeout, `None` when waiting forever
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Whether any thread holds the mutex
    pub fn is_locked(&self) -> bool {
        self.state().is_some()
    }

    /// Block until the mutex is free or the timeout elapses
    pub fn acquire(&self) -> Result<BoundedMutexGuard<'_>> {
        let current = thread::current().id();
        let mut owner = self.state();
        if *owner == Some(current) {
            return Err(Error::lock_recursion(&self.name));
        }

        match self.timeout {
            None => {
                while owner.is_some() {
                    owner = self
                        .released
                        .wait(owner)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            }
            Some(timeout) => {
                let deadline = Instant::now() + timeout;
                while owner.is_some() {
                    let now = Instant::now();
                    if now >= deadline {
                        return Err(self.timeout_error());
                    }
                    let (guard, _) = self
                        .released
                        .wait_timeout(owner, deadline - now)
                        .unwrap_or_else(PoisonError::into_inner);
                    owner = guard;
                }
            }
        }

        *owner = Some(current);
        Ok(BoundedMutexGuard {
            mutex: Some(self),
            _not_send: PhantomData,
        })
    }

    /// Take the mutex only if it is free right now
    pub fn try_acquire(&self) -> Result<BoundedMutexGuard<'_>> {
        let current = thread::current().id();
        let mut owner = self.state();
        match *owner {
            Some(holder) if holder == current => Err(Error::lock_recursion(&self.name)),
            Some(_) => Err(Error::lock_timeout(&self.name, 0)),
            None => {
                *owner = Some(current);
                Ok(BoundedMutexGuard {
                    mutex: Some(self),
                    _not_send: PhantomData,
                })
            }
        }
    }

    fn release(&self) {
        *self.state() = None;
        self.released.notify_one();
    }

    fn state(&self) -> MutexGuard<'_, Option<ThreadId>> {
        // The owner slot stays consistent even if a holder panicked.
        self.owner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn timeout_error(&self) -> Error {
        let timeout_ms = self
            .timeout
            .map_or(0, |timeout| u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        Error::lock_timeout(&self.name, timeout_ms)
    }
}

/// Release token of a [`BoundedMutex`]
///
/// Releases on drop. [`release`](Self::release) may be called earlier; any
/// further release is a no-op. The guard stays on the acquiring thread.
#[must_use = "the mutex is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct BoundedMutexGuard<'a> {
    mutex: Option<&'a BoundedMutex>,
    _not_send: PhantomData<*const ()>,
}

impl BoundedMutexGuard<'_> {
    /// Release the mutex now
    pub fn release(&mut self) {
        if let Some(mutex) = self.mutex.take() {
            mutex.release();
        }
    }

    /// Whether this guard still holds the mutex
    pub fn is_held(&self) -> bool {
        self.mutex.is_some()
    }
}

impl Drop for BoundedMutexGuard<'_> {
    fn drop(&mut self) {
        self.release();
    }
}
