use std::cell::Cell;
use std::time::{Duration, Instant};

/// Clock for the move being thought about.
pub trait Clock {
    fn elapsed_ms(&self) -> u64;
    /// Time left on the mover's clock when the move started.
    fn remaining_ms(&self) -> u64;
    fn increment_ms(&self) -> u64;
}

/// Wall clock started when the move begins.
#[derive(Clone, Debug)]
pub struct GameClock {
    start: Instant,
    remaining: Duration,
    increment: Duration,
}

impl GameClock {
    pub fn start(remaining: Duration, increment: Duration) -> Self {
        Self { start: Instant::now(), remaining, increment }
    }
}

impl Clock for GameClock {
    fn elapsed_ms(&self) -> u64 { self.start.elapsed().as_millis() as u64 }
    fn remaining_ms(&self) -> u64 { self.remaining.as_millis() as u64 }
    fn increment_ms(&self) -> u64 { self.increment.as_millis() as u64 }
}

/// Hand-driven clock.
#[derive(Debug, Default)]
pub struct ManualClock {
    elapsed: Cell<u64>,
    remaining: u64,
    increment: u64,
}

impl ManualClock {
    pub fn new(remaining_ms: u64, increment_ms: u64) -> Self {
        Self { elapsed: Cell::new(0), remaining: remaining_ms, increment: increment_ms }
    }

    pub fn set_elapsed(&self, ms: u64) { self.elapsed.set(ms); }
}

impl Clock for ManualClock {
    fn elapsed_ms(&self) -> u64 { self.elapsed.get() }
    fn remaining_ms(&self) -> u64 { self.remaining }
    fn increment_ms(&self) -> u64 { self.increment }
}

/// Per-move time budget: aborts once elapsed time exceeds the limit.
pub struct TimeBudget<'a> {
    clock: &'a dyn Clock,
    limit_ms: Option<u64>,
}

impl<'a> TimeBudget<'a> {
    /// `remaining / divisor + increment`.
    pub fn from_clock(clock: &'a dyn Clock, divisor: u64) -> Self {
        let limit = clock.remaining_ms() / divisor.max(1) + clock.increment_ms();
        Self { clock, limit_ms: Some(limit) }
    }

    pub fn fixed(clock: &'a dyn Clock, limit_ms: u64) -> Self {
        Self { clock, limit_ms: Some(limit_ms) }
    }

    /// Never aborts; depth limits alone end the search.
    pub fn unlimited(clock: &'a dyn Clock) -> Self {
        Self { clock, limit_ms: None }
    }

    pub fn limit_ms(&self) -> Option<u64> { self.limit_ms }

    pub fn elapsed_ms(&self) -> u64 { self.clock.elapsed_ms() }

    pub fn should_abort(&self) -> bool {
        match self.limit_ms {
            Some(limit) => self.clock.elapsed_ms() > limit,
            None => false,
        }
    }
}
