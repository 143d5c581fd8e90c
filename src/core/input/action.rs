//=========================================================================
// Action Trait & Input Context
//=========================================================================
//
// Game-defined action trait and input context system.
//
// Actions: opaque identifiers routed by the engine, interpreted by screens.
// Contexts: different bindings per screen (menu vs lobby vs arena).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// Actions are high-level commands (Confirm, Back, CopyRoomCode) mapped
/// from raw inputs. The engine routes them onto the message bus every tick
/// without interpreting them.
///
/// # Example
///
/// ```
/// use jetpack_skywars::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Confirm, Back }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== InputContext ========================================================

/// Identifies which set of bindings is active.
///
/// The same key may mean different things per screen: `Enter` confirms
/// the highlighted battle mode on the menu but requests "Join Battle" in
/// the lobby. Screens switch the context when they are entered.
///
/// ```
/// # use jetpack_skywars::prelude::*;
/// const MENU: InputContext = InputContext::Primary;
/// const LOBBY: InputContext = InputContext::custom(0);
/// assert_ne!(MENU, LOBBY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputContext {
    /// Default context.
    #[default]
    Primary,

    /// User-defined context.
    Custom(u32),
}

impl InputContext {
    /// Creates a custom context.
    #[inline]
    pub const fn custom(id: u32) -> Self {
        Self::Custom(id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Confirm,
        Back,
    }

    impl Action for TestAction {}

    #[test]
    fn actions_deduplicate_in_sets() {
        let mut set = HashSet::new();
        set.insert(TestAction::Confirm);
        set.insert(TestAction::Confirm);
        set.insert(TestAction::Back);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn action_bounds_hold() {
        fn assert_action<T: Action>() {}
        assert_action::<TestAction>();
    }

    #[test]
    fn primary_is_default() {
        assert_eq!(InputContext::default(), InputContext::Primary);
    }

    #[test]
    fn primary_differs_from_custom_zero() {
        assert_ne!(InputContext::Primary, InputContext::custom(0));
    }

    #[test]
    fn custom_contexts_are_distinct() {
        let contexts: HashSet<_> = (0..16).map(InputContext::custom).collect();
        assert_eq!(contexts.len(), 16);
    }
}
