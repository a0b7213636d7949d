//! Random sources for the generators
//!
//! Every generator has a `*_with` variant taking any `rand::Rng`, so callers
//! and tests can inject their own source. The plain variants draw from a
//! process-wide [`SharedRng`], which can be reseeded to make a whole run
//! deterministic.

use std::sync::{Mutex, OnceLock, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// A seedable RNG that can be used from any number of threads
#[derive(Debug)]
pub struct SharedRng {
    inner: Mutex<StdRng>,
}

impl SharedRng {
    /// Create a source seeded from operating system entropy
    pub fn from_os_rng() -> Self {
        Self {
            inner: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a deterministic source
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Replace the generator state with a deterministic one
    pub fn reseed(&self, seed: u64) {
        *self.lock() = StdRng::seed_from_u64(seed);
    }

    /// Run `f` with exclusive access to the generator.
    ///
    /// The lock is held for the whole closure, so one identifier is drawn
    /// without interleaving with other threads.
    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        f(&mut self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StdRng> {
        // StdRng holds no invariant a panicking closure could break
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static SHARED: OnceLock<SharedRng> = OnceLock::new();

/// The process-wide source used by `generate()` functions
pub fn shared() -> &'static SharedRng {
    SHARED.get_or_init(SharedRng::from_os_rng)
}

/// Reseed the process-wide source.
///
/// # Example
///
/// ```
/// brdocs::random::reseed(42);
/// let first = brdocs::cpf::generate();
/// brdocs::random::reseed(42);
/// assert_eq!(brdocs::cpf::generate(), first);
/// ```
pub fn reseed(seed: u64) {
    shared().reseed(seed);
}
