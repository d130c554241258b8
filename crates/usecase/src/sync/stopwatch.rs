// crates/usecase/src/sync/stopwatch.rs
use std::{
    sync::Mutex,
    time::{Duration, Instant},
};

use super::lock;

#[derive(Debug, Clone, Copy, Default)]
enum State {
    #[default]
    Idle,
    Running(Instant),
    Stopped(Duration),
}

/// One-shot stopwatch shared between the start barrier and the aggregator.
#[derive(Debug, Default)]
pub struct Stopwatch {
    state: Mutex<State>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring. Returns `false` if it was already started.
    pub fn start(&self) -> bool {
        let mut state = lock(&self.state);
        match *state {
            State::Idle => {
                *state = State::Running(Instant::now());
                true
            }
            State::Running(_) | State::Stopped(_) => false,
        }
    }

    /// Freeze the elapsed time. Returns `None` unless it was running.
    pub fn stop(&self) -> Option<Duration> {
        let mut state = lock(&self.state);
        match *state {
            State::Running(started) => {
                let elapsed = started.elapsed();
                *state = State::Stopped(elapsed);
                Some(elapsed)
            }
            State::Idle | State::Stopped(_) => None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        match *lock(&self.state) {
            State::Idle => Duration::ZERO,
            State::Running(started) => started.elapsed(),
            State::Stopped(elapsed) => elapsed,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(*lock(&self.state), State::Running(_))
    }

    pub fn is_stopped(&self) -> bool {
        matches!(*lock(&self.state), State::Stopped(_))
    }
}
