//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking with per-tick deltas.
//
// Architecture:
//   InputEvent → process_events() → held sets + ordered presses → query
//
// Tick lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== StateTracker ========================================================

/// Tracks held keys/buttons and the presses that happened this tick.
///
/// Presses are kept in arrival order so text entry types characters in
/// the order they were struck, even when several land in one tick.
pub struct StateTracker {
    //--- Persistent State (survives tick boundary) -----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,

    //--- Tick Deltas (reset via clear()) ---------------------------------
    keys_pressed_this_tick: Vec<(KeyCode, Modifiers)>,
    keys_released_this_tick: HashSet<KeyCode>,
    mouse_buttons_pressed_this_tick: HashSet<MouseButton>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            modifiers: Modifiers::NONE,
            keys_pressed_this_tick: Vec::new(),
            keys_released_this_tick: HashSet::new(),
            mouse_buttons_pressed_this_tick: HashSet::new(),
        }
    }

    //--- Tick Processing --------------------------------------------------

    /// Clears tick-specific deltas (pressed/released flags).
    pub(super) fn clear(&mut self) {
        self.keys_pressed_this_tick.clear();
        self.keys_released_this_tick.clear();
        self.mouse_buttons_pressed_this_tick.clear();
    }

    /// Processes input events, updating internal state.
    pub(super) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = *modifiers;
                // Auto-repeat delivers KeyDown while held; only the first counts
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_tick.push((*key, *modifiers));
                }
            }

            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = *modifiers;
                if self.keys_down.remove(key) {
                    self.keys_released_this_tick.insert(*key);
                }
            }

            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = *modifiers;
                if self.mouse_buttons_down.insert(*button) {
                    self.mouse_buttons_pressed_this_tick.insert(*button);
                }
            }

            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = *modifiers;
                self.mouse_buttons_down.remove(button);
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (*x, *y);
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this tick.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_tick.iter().any(|(k, _)| *k == key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this tick.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_tick.contains(&key)
    }

    /// Keys pressed this tick, in arrival order, with the modifiers held
    /// at the time of each press.
    pub fn keys_pressed(&self) -> impl Iterator<Item = &(KeyCode, Modifiers)> {
        self.keys_pressed_this_tick.iter()
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_tick.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Screen coordinates (pixels, top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    //=====================================================================
    // Query API - Modifiers
    //=====================================================================

    /// Returns the modifier state reported with the latest event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
