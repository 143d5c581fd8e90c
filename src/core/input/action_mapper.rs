//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps input events to actions based on bindings and the active context.
//
// Architecture:
//   (key, modifiers, context) → HashMap → Action
//
// Only key presses bound in the active context resolve to actions.
// Mouse buttons reach the StateTracker but are never bound.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, InputContext},
    event::{InputEvent, KeyCode, Modifiers},
};

//=== ActionMapper ========================================================

/// Maps key presses to actions via (key, modifiers, context) lookups.
pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<(KeyCode, Modifiers, InputContext), A>,
    current_context: InputContext,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a new mapper with Primary context active and no bindings.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            current_context: InputContext::Primary,
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key with modifiers to an action (exact match required).
    pub(crate) fn bind_key_with_mods(
        &mut self,
        key: KeyCode,
        modifiers: Modifiers,
        action: A,
        context: InputContext,
    ) {
        self.key_bindings.insert((key, modifiers, context), action);
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps a press event to an action in the active context.
    ///
    /// Releases, clicks and cursor motion never produce actions.
    pub(crate) fn map_event(&self, event: &InputEvent) -> Option<A> {
        match event {
            InputEvent::KeyDown { key, modifiers } => self
                .key_bindings
                .get(&(*key, *modifiers, self.current_context))
                .copied(),
            _ => None,
        }
    }

    //--- Context ----------------------------------------------------------

    pub(crate) fn set_context(&mut self, context: InputContext) {
        self.current_context = context;
    }

    pub(crate) fn current_context(&self) -> InputContext {
        self.current_context
    }

    pub(crate) fn binding_count(&self) -> usize {
        self.key_bindings.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
