//=========================================================================
// Input System
//
// High-level input handling for the logic thread.
//
// Responsibilities:
// - Fold each tick's platform input batches into the `StateTracker`
// - Resolve key presses to game actions for the active context
// - Expose binding configuration to the game during `Engine::init`
//
// Pipeline per tick:
// ```text
//   Vec<Vec<InputEvent>> ─► StateTracker (held keys, ordered presses)
//                        └► ActionMapper  ─► actions ─► MessageBus
// ```
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub(crate) mod action_mapper;
pub mod event;
pub mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, InputContext};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;

//=== External Crates =====================================================

use log::{debug, trace};

//=== Internal Imports ====================================================

use action_mapper::ActionMapper;

//=== InputSystem =========================================================

/// Binds raw inputs to actions and produces the action list of each tick.
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
    actions: Vec<A>,
}

impl<A: Action> InputSystem<A> {
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
            actions: Vec::with_capacity(8),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key (no modifiers) to an action within a context.
    pub fn bind_key(&mut self, key: KeyCode, action: A, context: InputContext) {
        self.mapper.bind_key_with_mods(key, Modifiers::NONE, action, context);
    }

    /// Binds a key combination (exact modifier match) to an action.
    pub fn bind_key_with_mods(
        &mut self,
        key: KeyCode,
        modifiers: Modifiers,
        action: A,
        context: InputContext,
    ) {
        self.mapper.bind_key_with_mods(key, modifiers, action, context);
    }

    /// Total number of key bindings across all contexts.
    pub fn binding_count(&self) -> usize {
        self.mapper.binding_count()
    }

    //--- Context ----------------------------------------------------------

    pub fn set_context(&mut self, context: InputContext) {
        if self.mapper.current_context() != context {
            debug!(target: "core::input", "Input context → {:?}", context);
            self.mapper.set_context(context);
        }
    }

    pub fn context(&self) -> InputContext {
        self.mapper.current_context()
    }

    //--- Tick Processing --------------------------------------------------

    /// Digests one tick of input batches.
    ///
    /// Resets the tracker's per-tick deltas, applies every event in order
    /// and collects the actions the presses resolve to.
    pub fn process_frame(&mut self, state: &mut StateTracker, batches: &[Vec<InputEvent>]) {
        self.actions.clear();
        state.clear();

        for batch in batches {
            state.process_events(batch);
            self.actions
                .extend(batch.iter().filter_map(|event| self.mapper.map_event(event)));
        }

        if !self.actions.is_empty() {
            trace!(target: "core::input", "Actions this tick: {:?}", self.actions);
        }
    }

    /// Actions resolved during the last `process_frame`.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Confirm,
        Back,
        Copy,
    }

    impl Action for TestAction {}

    const LOBBY: InputContext = InputContext::custom(0);

    #[test]
    fn presses_resolve_to_actions_in_order() {
        let mut input = InputSystem::<TestAction>::new();
        let mut state = StateTracker::new();
        input.bind_key(KeyCode::Enter, TestAction::Confirm, InputContext::Primary);
        input.bind_key(KeyCode::Escape, TestAction::Back, InputContext::Primary);

        input.process_frame(
            &mut state,
            &[
                vec![InputEvent::key_down(KeyCode::Escape)],
                vec![InputEvent::key_down(KeyCode::Enter), InputEvent::key_up(KeyCode::Enter)],
            ],
        );

        assert_eq!(input.actions(), &[TestAction::Back, TestAction::Confirm]);
        assert!(state.is_key_pressed(KeyCode::Enter));
    }

    #[test]
    fn actions_reset_every_tick() {
        let mut input = InputSystem::<TestAction>::new();
        let mut state = StateTracker::new();
        input.bind_key(KeyCode::Enter, TestAction::Confirm, InputContext::Primary);

        input.process_frame(&mut state, &[vec![InputEvent::key_down(KeyCode::Enter)]]);
        assert_eq!(input.actions().len(), 1);

        input.process_frame(&mut state, &[]);
        assert!(input.actions().is_empty());
        assert!(!state.is_key_pressed(KeyCode::Enter));
    }

    #[test]
    fn context_switch_changes_resolution() {
        let mut input = InputSystem::<TestAction>::new();
        let mut state = StateTracker::new();
        input.bind_key_with_mods(KeyCode::KeyC, Modifiers::CTRL, TestAction::Copy, LOBBY);

        let ctrl_c = InputEvent::KeyDown { key: KeyCode::KeyC, modifiers: Modifiers::CTRL };

        input.process_frame(&mut state, &[vec![ctrl_c.clone()]]);
        assert!(input.actions().is_empty());

        input.set_context(LOBBY);
        assert_eq!(input.context(), LOBBY);
        input.process_frame(&mut state, &[vec![InputEvent::KeyUp {
            key: KeyCode::KeyC,
            modifiers: Modifiers::CTRL,
        }]]);
        input.process_frame(&mut state, &[vec![ctrl_c]]);
        assert_eq!(input.actions(), &[TestAction::Copy]);
    }

    #[test]
    fn binding_count_tracks_contexts() {
        let mut input = InputSystem::<TestAction>::new();
        input.bind_key(KeyCode::Enter, TestAction::Confirm, InputContext::Primary);
        input.bind_key(KeyCode::Escape, TestAction::Back, LOBBY);
        input.bind_key_with_mods(KeyCode::KeyC, Modifiers::CTRL, TestAction::Copy, LOBBY);
        assert_eq!(input.binding_count(), 3);

        // Rebinding the same combination replaces the action
        input.bind_key(KeyCode::Escape, TestAction::Confirm, LOBBY);
        assert_eq!(input.binding_count(), 3);
    }
}
