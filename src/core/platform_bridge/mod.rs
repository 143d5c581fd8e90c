//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the windowing backend and the logic thread.
//
// Components:
// - `interface`: channel message types and the platform error
// - `event_collector`: core-side, per-tick draining of platform events
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{CoreEvent, PlatformEvent};

pub use interface::PlatformError;
