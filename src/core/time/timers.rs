//=========================================================================
// Repeating Timers
//=========================================================================
//
// Interval timers driven by the logic clock.
//
// Architecture:
//   Timers::start_repeating(period) → TimerHandle (owned by the caller)
//   Timers::advance(dt)             → accumulate fires per live timer
//   Timers::take_fired(&handle)     → fires since last call
//   drop(TimerHandle)               → timer pruned on next advance()
//
// Ownership is the cancellation mechanism: whoever owns the handle owns
// the timer, so every teardown path that drops the owner stops it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::trace;

//=== TimerId =============================================================

/// Identifier of a timer within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

//=== TimerHandle =========================================================

/// Owning handle of a repeating timer. Dropping it cancels the timer.
#[derive(Debug)]
pub struct TimerHandle {
    id: TimerId,
    alive: Arc<AtomicBool>,
}

impl TimerHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Release);
    }
}

//=== Timers ==============================================================

struct TimerEntry {
    period: Duration,
    accumulated: Duration,
    fired: u32,
    alive: Arc<AtomicBool>,
}

/// Registry of repeating timers advanced by the logic clock.
pub struct Timers {
    next_id: u64,
    entries: HashMap<TimerId, TimerEntry>,
}

impl Timers {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: HashMap::new(),
        }
    }

    /// Starts a timer firing once every `period`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn start_repeating(&mut self, period: Duration) -> TimerHandle {
        assert!(!period.is_zero(), "Timer period must be positive");

        let id = TimerId(self.next_id);
        self.next_id += 1;

        let alive = Arc::new(AtomicBool::new(true));
        self.entries.insert(
            id,
            TimerEntry {
                period,
                accumulated: Duration::ZERO,
                fired: 0,
                alive: Arc::clone(&alive),
            },
        );

        trace!(target: "core::time", "Timer {:?} started ({:?})", id, period);
        TimerHandle { id, alive }
    }

    /// Advances every live timer by `dt` and prunes cancelled ones.
    pub(crate) fn advance(&mut self, dt: Duration) {
        self.entries.retain(|id, entry| {
            if !entry.alive.load(Ordering::Acquire) {
                trace!(target: "core::time", "Timer {:?} cancelled", id);
                return false;
            }

            entry.accumulated += dt;
            while entry.accumulated >= entry.period {
                entry.accumulated -= entry.period;
                entry.fired = entry.fired.saturating_add(1);
            }
            true
        });
    }

    /// Returns how many times the timer fired since the last call.
    ///
    /// Several fires can pile up in one tick if the logic thread stalled.
    pub fn take_fired(&mut self, handle: &TimerHandle) -> u32 {
        self.entries
            .get_mut(&handle.id)
            .map_or(0, |entry| std::mem::take(&mut entry.fired))
    }

    /// Number of timers whose handle is still alive.
    pub fn active_count(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.alive.load(Ordering::Acquire))
            .count()
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
