//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container handed to scenes.
//
// Contains state that scenes read/write:
// - input_state: held keys, per-tick presses, mouse
// - message_bus: actions of this tick, transition requests
// - time / timers: logic clock and repeating timers
// - input_context: which binding set is active
// - presentation: what the window should show after this tick
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{InputContext, InputEvent, StateTracker};
use crate::core::message_bus::MessageBus;
use crate::core::scene::{SceneKey, SceneTransition};
use crate::core::time::{FrameClock, Timers};

//=== GlobalContext =======================================================

/// Data scenes may touch during their lifecycle methods.
///
/// Separated from [`GlobalSystems`](super::GlobalSystems) so a scene can
/// hold `&mut GlobalContext` while the scene manager that calls it is
/// borrowed mutably.
pub struct GlobalContext {
    /// Low-level input state (held keys, ordered presses this tick).
    pub input_state: StateTracker,

    /// Per-tick message queues (actions, scene transitions).
    pub message_bus: MessageBus,

    /// Logic clock, advanced before scenes update.
    pub time: FrameClock,

    /// Repeating timers, advanced together with `time`.
    pub timers: Timers,

    /// Binding set the input system resolves actions with.
    ///
    /// Scenes set this in `on_enter`; it takes effect from the next tick.
    pub input_context: InputContext,

    /// Latest presentation produced by a scene, drained by the core loop.
    pub(crate) presentation: Option<String>,

    /// Input batches collected for the current tick.
    ///
    /// Filled by the orchestrator, consumed by `InputSystem` and cleared
    /// before scenes run (use `input_state` instead).
    pub(crate) frame_input_events: Vec<Vec<InputEvent>>,
}

impl GlobalContext {
    pub(crate) fn new() -> Self {
        Self {
            input_state: StateTracker::new(),
            message_bus: MessageBus::new(),
            time: FrameClock::new(),
            timers: Timers::new(),
            input_context: InputContext::Primary,
            presentation: None,
            frame_input_events: Vec::new(),
        }
    }

    /// Queues a scene stack change, applied after this tick's updates.
    pub fn request_transition<S: SceneKey>(&mut self, transition: SceneTransition<S>) {
        self.message_bus.push(transition);
    }

    /// Publishes the one-line description of what is on screen.
    ///
    /// The platform shows it as the window title. Later calls in the same
    /// tick win.
    pub fn present(&mut self, text: impl Into<String>) {
        self.presentation = Some(text.into());
    }

    /// Takes the pending presentation, if any scene produced one.
    pub(crate) fn take_presentation(&mut self) -> Option<String> {
        self.presentation.take()
    }
}
