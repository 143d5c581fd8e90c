//=========================================================================
// Input Event Types
//
// Engine-side representation of low-level keyboard and mouse input.
//
// The platform layer (winit) translates OS events into these types before
// they cross the thread boundary, so screens and the action mapper never
// see a windowing type.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker / ActionMapper
//         ↓
//    Screen logic (menu navigation, name entry, back)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// Side buttons, thumb buttons and anything else.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Covers the keys the screens react to: letters and digits for pilot
/// name entry, arrows and Enter for menu navigation, Escape for "back".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Navigation -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Backspace,
    Minus,

    /// Keys the platform reported but this enum does not cover.
    Unidentified,
}

impl KeyCode {
    /// Returns the character this key types for name entry, if any.
    ///
    /// Letters are lowercase unless `shift` is held. `Minus` types `-`
    /// and shifted `_`. Everything else (arrows, Enter, ...) is `None`.
    pub fn to_char(self, shift: bool) -> Option<char> {
        use KeyCode::*;
        let c = match self {
            Digit0 => '0',
            Digit1 => '1',
            Digit2 => '2',
            Digit3 => '3',
            Digit4 => '4',
            Digit5 => '5',
            Digit6 => '6',
            Digit7 => '7',
            Digit8 => '8',
            Digit9 => '9',
            KeyA => 'a',
            KeyB => 'b',
            KeyC => 'c',
            KeyD => 'd',
            KeyE => 'e',
            KeyF => 'f',
            KeyG => 'g',
            KeyH => 'h',
            KeyI => 'i',
            KeyJ => 'j',
            KeyK => 'k',
            KeyL => 'l',
            KeyM => 'm',
            KeyN => 'n',
            KeyO => 'o',
            KeyP => 'p',
            KeyQ => 'q',
            KeyR => 'r',
            KeyS => 's',
            KeyT => 't',
            KeyU => 'u',
            KeyV => 'v',
            KeyW => 'w',
            KeyX => 'x',
            KeyY => 'y',
            KeyZ => 'z',
            Minus => return Some(if shift { '_' } else { '-' }),
            _ => return None,
        };

        if shift && c.is_ascii_lowercase() {
            Some(c.to_ascii_uppercase())
        } else {
            Some(c)
        }
    }
}

//=== InputEvent ==========================================================

/// Low-level input event produced by the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Events compare by type + payload (key/button + modifiers).
/// `MouseMoved` events are equal regardless of coordinates so the
/// platform buffer can coalesce them (last position wins).
///
/// ```text
/// KeyDown{A, CTRL} == KeyDown{A, CTRL}       ✓
/// KeyDown{A, CTRL} == KeyDown{A, NONE}       ✗
/// KeyDown{A}       == KeyUp{A}               ✗
/// MouseMoved{...}  == MouseMoved{...}        ✓
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    MouseButtonDown {
        button: MouseButton,
        modifiers: Modifiers,
    },

    MouseButtonUp {
        button: MouseButton,
        modifiers: Modifiers,
    },

    /// Cursor position in screen space (pixels, top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Unsupported event, ignored by the input system.
    Unidentified,
}

impl InputEvent {
    /// Shorthand for a key press without modifiers.
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown { key, modifiers: Modifiers::NONE }
    }

    /// Shorthand for a key release without modifiers.
    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyUp { key, modifiers: Modifiers::NONE }
    }

    /// Returns `true` for events whose order matters (keys and buttons).
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Self::MouseMoved { .. } | Self::Unidentified)
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            )
            | (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + key/button + modifiers. Coordinates of
/// `MouseMoved` are skipped to stay consistent with equality.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            _ => {}
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Bindings match modifiers exactly: a `Ctrl+C` binding does not fire on
/// a plain `C`, and a plain `C` binding does not fire on `Ctrl+C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    //=====================================================================
    // Equality & Hashing
    //=====================================================================

    #[test]
    fn same_key_different_modifiers_not_equal() {
        let plain = InputEvent::key_down(KeyCode::KeyC);
        let ctrl = InputEvent::KeyDown { key: KeyCode::KeyC, modifiers: Modifiers::CTRL };
        assert_ne!(plain, ctrl);
        assert_ne!(hash_of(&plain), hash_of(&ctrl));
    }

    #[test]
    fn key_down_and_key_up_differ() {
        assert_ne!(InputEvent::key_down(KeyCode::Escape), InputEvent::key_up(KeyCode::Escape));
    }

    #[test]
    fn mouse_moved_coalesces_in_hashset() {
        let mut set = HashSet::new();
        set.insert(InputEvent::MouseMoved { x: 1.0, y: 2.0 });
        set.replace(InputEvent::MouseMoved { x: 300.0, y: 400.0 });

        assert_eq!(set.len(), 1);
        match set.iter().next() {
            Some(InputEvent::MouseMoved { x, y }) => assert_eq!((*x, *y), (300.0, 400.0)),
            other => panic!("expected MouseMoved, got {:?}", other),
        }
    }

    #[test]
    fn discrete_classification() {
        assert!(InputEvent::key_down(KeyCode::Enter).is_discrete());
        assert!(InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE
        }
        .is_discrete());
        assert!(!InputEvent::MouseMoved { x: 0.0, y: 0.0 }.is_discrete());
        assert!(!InputEvent::Unidentified.is_discrete());
    }

    //=====================================================================
    // Name Entry Characters
    //=====================================================================

    #[test]
    fn letters_respect_shift() {
        assert_eq!(KeyCode::KeyS.to_char(false), Some('s'));
        assert_eq!(KeyCode::KeyS.to_char(true), Some('S'));
    }

    #[test]
    fn digits_ignore_shift() {
        assert_eq!(KeyCode::Digit4.to_char(false), Some('4'));
        assert_eq!(KeyCode::Digit4.to_char(true), Some('4'));
    }

    #[test]
    fn minus_types_dash_or_underscore() {
        assert_eq!(KeyCode::Minus.to_char(false), Some('-'));
        assert_eq!(KeyCode::Minus.to_char(true), Some('_'));
    }

    #[test]
    fn navigation_keys_do_not_type() {
        for key in [KeyCode::Enter, KeyCode::Escape, KeyCode::ArrowUp, KeyCode::Backspace, KeyCode::Space] {
            assert_eq!(key.to_char(false), None, "{:?} should not type", key);
        }
    }

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
