//! Rendezvous primitives shared by the workers of one run.
//!
//! [`StartBarrier`] opens the timed window once every worker is ready and
//! [`CompletionAggregator`] closes it when the last partial count arrives.
//! Both drive the same [`Stopwatch`].

mod completion;
mod start_barrier;
mod stopwatch;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use completion::CompletionAggregator;
pub use start_barrier::{Arrival, StartBarrier};
pub use stopwatch::Stopwatch;

/// The guarded state is plain counters and flags, still consistent after a panic.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
