//=========================================================================
// Scene System
//=========================================================================
//
// Screen lifecycle and stack-based switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene<S>>>
//     └─ stack: Vec<S>
//
// Flow:
//   update() → Scene::update() on the top of the stack
//   process_transitions() → MessageBus::take::<SceneTransition<S>>()
//                         → on_exit (old) → stack edit → on_enter (new)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;

//=== Module Declarations =================================================

mod scene_manager;

//=== Public API ==========================================================

pub use scene_manager::{SceneKey, SceneManager, SceneTransition};

//=== Scene Trait =========================================================

/// A screen with lifecycle hooks and per-tick logic.
///
/// Scenes are registered once and keep their value between activations.
/// Anything that must only exist while the screen is shown (HUD timers,
/// per-visit counters) is created in `on_enter` and dropped in `on_exit`.
///
/// Only `update()` is required:
///
/// ```rust
/// # use jetpack_skywars::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Title }
/// # impl SceneKey for Screen {}
/// struct TitleScreen;
///
/// impl Scene<Screen> for TitleScreen {
///     fn update(&mut self, context: &mut GlobalContext) {
///         context.present("Title");
///     }
/// }
/// ```
pub trait Scene<S: SceneKey>: Send {
    /// Called when the scene enters the active stack.
    fn on_enter(&mut self, _context: &mut GlobalContext) {}

    /// Called when the scene leaves the active stack.
    fn on_exit(&mut self, _context: &mut GlobalContext) {}

    /// Called every tick while the scene is on top of the stack.
    fn update(&mut self, context: &mut GlobalContext);
}
