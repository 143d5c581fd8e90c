//=========================================================================
// Logic Time
//=========================================================================
//
// Deterministic time for the logic thread.
//
// Architecture:
//   orchestrator tick(dt) → FrameClock::advance(dt)   (elapsed, ticks)
//                         → Timers::advance(dt)       (repeating timers)
//
// Nothing here reads the OS clock: the orchestrator decides what `dt` is,
// so headless tests can drive hours of play in microseconds.
//
//=========================================================================

//=== Module Declarations =================================================

mod clock;
mod timers;

//=== Public API ==========================================================

pub use clock::FrameClock;
pub use timers::{TimerHandle, TimerId, Timers};
