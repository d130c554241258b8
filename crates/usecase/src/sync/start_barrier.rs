// crates/usecase/src/sync/start_barrier.rs
use std::sync::{Arc, Condvar, Mutex, PoisonError};

use county_shared_kernel::{ApplicationError, ApplicationResult};
use tracing::debug;

use super::{Stopwatch, lock};

const COMPONENT: &str = "start barrier";

/// Which side of the release a caller was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// The final arrival; it started the stopwatch and opened the barrier.
    Leader,
    Follower,
}

#[derive(Debug, Default)]
struct State {
    arrived: usize,
    open: bool,
}

/// Single-use rendezvous for exactly `parties` workers.
///
/// No caller returns from [`arrive_and_wait`](Self::arrive_and_wait) until all
/// parties have arrived. The last arrival starts the shared stopwatch before
/// anyone is released, so the measured window never includes worker setup.
#[derive(Debug)]
pub struct StartBarrier {
    parties: usize,
    state: Mutex<State>,
    released: Condvar,
    stopwatch: Arc<Stopwatch>,
}

impl StartBarrier {
    /// # Errors
    ///
    /// A barrier for zero parties could never open and is rejected.
    pub fn new(parties: usize, stopwatch: Arc<Stopwatch>) -> ApplicationResult<Self> {
        if parties == 0 {
            return Err(ApplicationError::InvariantViolation {
                component: COMPONENT,
                details: "participant count must be at least 1".to_string(),
            });
        }
        Ok(Self {
            parties,
            state: Mutex::new(State::default()),
            released: Condvar::new(),
            stopwatch,
        })
    }

    pub fn parties(&self) -> usize {
        self.parties
    }

    pub fn is_open(&self) -> bool {
        lock(&self.state).open
    }

    /// Block until every party has arrived.
    ///
    /// # Errors
    ///
    /// Arriving after all `parties` have already arrived means some worker was
    /// scheduled twice; the call fails immediately without waiting.
    pub fn arrive_and_wait(&self) -> ApplicationResult<Arrival> {
        let mut state = lock(&self.state);
        if state.arrived >= self.parties {
            return Err(ApplicationError::InvariantViolation {
                component: COMPONENT,
                details: format!("arrival {} exceeds {} parties", state.arrived + 1, self.parties),
            });
        }

        state.arrived += 1;
        if state.arrived == self.parties {
            self.stopwatch.start();
            state.open = true;
            drop(state);
            self.released.notify_all();
            debug!(parties = self.parties, "start barrier released");
            return Ok(Arrival::Leader);
        }

        let _open = self
            .released
            .wait_while(state, |s| !s.open)
            .unwrap_or_else(PoisonError::into_inner);
        Ok(Arrival::Follower)
    }
}
