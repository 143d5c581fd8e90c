//=========================================================================
// Input Buffer
//
// Per-frame store of translated input between winit callbacks and the
// channel flush on RedrawRequested.
//
// Responsibilities:
// - Keep discrete events (keys, buttons) in order, dropping consecutive
//   duplicates produced by key auto-repeat
// - Coalesce continuous events (cursor motion), last value wins
// - Hand both over via `drain()`, or nothing when the frame was idle
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Modules ====================================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        Self {
            discrete: Vec::with_capacity(32),
            continuous: HashSet::with_capacity(4),
        }
    }

    /// Records a continuous event, replacing the previous one of its kind.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Records a discrete event unless it repeats the previous one.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Takes `(discrete, continuous)` for this frame, or `None` if empty.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::KeyCode;

    fn mouse_move(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    #[test]
    fn idle_frame_drains_nothing() {
        assert!(InputBuffer::new().drain().is_none());
    }

    #[test]
    fn auto_repeat_collapses() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(InputEvent::key_down(KeyCode::Backspace));
        buffer.push_discrete(InputEvent::key_down(KeyCode::Backspace));
        buffer.push_discrete(InputEvent::key_up(KeyCode::Backspace));
        buffer.push_discrete(InputEvent::key_down(KeyCode::Backspace));

        let (discrete, _) = buffer.drain().unwrap();
        assert_eq!(discrete.len(), 3);
    }

    #[test]
    fn typed_name_keeps_order() {
        let mut buffer = InputBuffer::new();
        for key in [KeyCode::KeyA, KeyCode::KeyC, KeyCode::KeyE] {
            buffer.push_discrete(InputEvent::key_down(key));
        }

        let (discrete, continuous) = buffer.drain().unwrap();
        assert_eq!(
            discrete,
            vec![
                InputEvent::key_down(KeyCode::KeyA),
                InputEvent::key_down(KeyCode::KeyC),
                InputEvent::key_down(KeyCode::KeyE),
            ]
        );
        assert!(continuous.is_empty());
    }

    #[test]
    fn cursor_motion_last_value_wins() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(mouse_move(10.0, 10.0));
        buffer.push_continuous(mouse_move(20.0, 30.0));

        let (_, continuous) = buffer.drain().unwrap();
        assert_eq!(continuous.len(), 1);
        match continuous[0] {
            InputEvent::MouseMoved { x, y } => assert_eq!((x, y), (20.0, 30.0)),
            ref other => panic!("expected MouseMoved, got {:?}", other),
        }
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(InputEvent::key_down(KeyCode::Enter));
        buffer.push_continuous(mouse_move(5.0, 5.0));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }
}
