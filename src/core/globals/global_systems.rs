//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Systems operate on GlobalContext data once per tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputSystem};
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

/// Engine-level logic systems, configured during `Engine::init`.
///
/// - `input`: key/button bindings and per-tick action resolution
/// - `scene_manager`: registered screens and the active stack
pub struct GlobalSystems<S: SceneKey, A: Action> {
    pub input: InputSystem<A>,
    pub scene_manager: SceneManager<S>,
}

impl<S: SceneKey, A: Action> GlobalSystems<S, A> {
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one logic tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Time**: advance the clock and repeating timers by `dt`
    /// 2. **Input**: fold batches into state, resolve actions in the
    ///    context the active scene asked for
    /// 3. **Actions**: replace last tick's actions on the bus
    /// 4. **Scenes**: update active scenes
    /// 5. **Transitions**: apply queued stack changes
    pub(crate) fn update(&mut self, context: &mut GlobalContext, dt: Duration) {
        // 1. Time
        context.time.advance(dt);
        context.timers.advance(dt);

        // 2. Input
        self.input.set_context(context.input_context);
        self.input
            .process_frame(&mut context.input_state, &context.frame_input_events);
        context.frame_input_events.clear();

        // 3. Actions
        context.message_bus.clear::<A>();
        context.message_bus.extend(self.input.actions().iter().copied());

        // 4. Scenes
        self.scene_manager.update(context);

        // 5. Transitions
        self.scene_manager.process_transitions(context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
