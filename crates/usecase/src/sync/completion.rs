// crates/usecase/src/sync/completion.rs
use std::sync::{
    Arc, Condvar, Mutex, PoisonError,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};

use county_shared_kernel::{ApplicationError, ApplicationResult, LineCount};
use tracing::{debug, error};

use super::{Stopwatch, lock};

const COMPONENT: &str = "completion aggregator";

/// Collects exactly one partial count per worker.
///
/// Partial counts are summed atomically. The report that brings the
/// outstanding count to zero stops the stopwatch and wakes
/// [`wait_and_collect`](Self::wait_and_collect). Workers never wait on each
/// other here; only the collector blocks.
#[derive(Debug)]
pub struct CompletionAggregator {
    expected: usize,
    total: AtomicU64,
    remaining: AtomicUsize,
    degraded: AtomicUsize,
    fault: Mutex<Option<ApplicationError>>,
    done: Mutex<bool>,
    all_reported: Condvar,
    stopwatch: Arc<Stopwatch>,
}

impl CompletionAggregator {
    /// # Errors
    ///
    /// An aggregator expecting zero reports could never complete and is rejected.
    pub fn new(expected: usize, stopwatch: Arc<Stopwatch>) -> ApplicationResult<Self> {
        if expected == 0 {
            return Err(ApplicationError::InvariantViolation {
                component: COMPONENT,
                details: "expected report count must be at least 1".to_string(),
            });
        }
        Ok(Self {
            expected,
            total: AtomicU64::new(0),
            remaining: AtomicUsize::new(expected),
            degraded: AtomicUsize::new(0),
            fault: Mutex::new(None),
            done: Mutex::new(false),
            all_reported: Condvar::new(),
            stopwatch,
        })
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Number of reports submitted through [`report_degraded`](Self::report_degraded).
    pub fn degraded(&self) -> usize {
        self.degraded.load(Ordering::Acquire)
    }

    /// Add one worker's partial count.
    ///
    /// # Errors
    ///
    /// Reporting more than `expected` times fails and poisons the final
    /// result, since the total can no longer be trusted.
    pub fn report(&self, partial: LineCount) -> ApplicationResult<()> {
        // The add must precede the decrement so the final decrement observes every total.
        self.total.fetch_add(partial.value(), Ordering::AcqRel);

        let previous = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));

        match previous {
            Ok(1) => {
                let elapsed = self.stopwatch.stop();
                *lock(&self.done) = true;
                self.all_reported.notify_all();
                debug!(reports = self.expected, ?elapsed, "all partial counts collected");
                Ok(())
            }
            Ok(_) => Ok(()),
            Err(_) => {
                let err = self.over_reported();
                self.record_fault(self.over_reported());
                Err(err)
            }
        }
    }

    /// Report a zero contribution for a range whose I/O failed.
    ///
    /// # Errors
    ///
    /// Same contract as [`report`](Self::report).
    pub fn report_degraded(&self) -> ApplicationResult<()> {
        self.degraded.fetch_add(1, Ordering::AcqRel);
        self.report(LineCount::zero())
    }

    /// Remember an invariant violation seen by a worker. The first one wins.
    pub fn record_fault(&self, fault: ApplicationError) {
        error!(error = %fault, "worker hit an invariant violation");
        let mut slot = lock(&self.fault);
        if slot.is_none() {
            *slot = Some(fault);
        }
    }

    /// Block until every expected report has arrived, then return the sum.
    ///
    /// # Errors
    ///
    /// Returns the first recorded invariant violation instead of a total.
    pub fn wait_and_collect(&self) -> ApplicationResult<LineCount> {
        let done = self
            .all_reported
            .wait_while(lock(&self.done), |done| !*done)
            .unwrap_or_else(PoisonError::into_inner);
        drop(done);

        if let Some(fault) = lock(&self.fault).take() {
            return Err(fault);
        }
        Ok(LineCount::new(self.total.load(Ordering::Acquire)))
    }

    fn over_reported(&self) -> ApplicationError {
        ApplicationError::InvariantViolation {
            component: COMPONENT,
            details: format!("more than {} partial counts reported", self.expected),
        }
    }
}
