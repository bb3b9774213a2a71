//! Process-local race clock

/// Elapsed race-time counter advanced by discrete ticks.
///
/// The clock counts whole seconds since the race start and is the only
/// mutable state in a loaded [`Session`](crate::Session). The session adds
/// its race-start anchor to produce the session time that indexes every
/// time-series query.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RaceClock {
    elapsed: u64,
}

impl RaceClock {
    /// Create a clock at race time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by a number of seconds
    pub fn advance(&mut self, seconds: u64) {
        self.elapsed = self.elapsed.saturating_add(seconds);
    }

    /// Advance the clock by one second
    pub fn tick(&mut self) {
        self.advance(1);
    }

    /// Elapsed race time in whole seconds
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}
