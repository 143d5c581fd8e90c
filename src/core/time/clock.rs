//=========================================================================
// Frame Clock
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== FrameClock ==========================================================

/// Logic-thread clock advanced once per tick.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed: Duration,
    delta: Duration,
    ticks: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn advance(&mut self, dt: Duration) {
        self.delta = dt;
        self.elapsed += dt;
        self.ticks += 1;
    }

    /// Time since the engine started ticking.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in seconds, as consumed by animation curves.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Duration of the last tick.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
