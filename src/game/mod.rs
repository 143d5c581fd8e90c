//=========================================================================
// Game Layer
//=========================================================================
//
// Jetpack Sky Wars on top of the engine core.
//
// Modules:
// - `view`: which screen is shown and how selections route
// - `screens`: one scene per view state
// - `actions`: game actions and per-screen key bindings
// - `content`: static tables (modes, leaderboard, roster, profile)
// - `entity` / `composer`: animated arena backdrop
// - `hud`: timer-driven stats overlay
// - `clipboard`: room code copy
//
//=========================================================================

//=== Module Declarations =================================================

pub mod actions;
pub mod clipboard;
pub mod composer;
pub mod content;
pub mod entity;
pub mod hud;
pub mod screens;
pub mod view;

//=== Public API ==========================================================

pub use actions::GameAction;
pub use view::{MenuSelection, ViewEvent, ViewState};

//=== Internal Dependencies ===============================================

use log::info;

use crate::core::globals::GlobalSystems;
use screens::{ArenaScreen, LobbyScreen, MenuScreen, SinglePlayerArenaScreen};

//=== Installation ========================================================

/// Binds keys and registers every screen, starting on the menu.
///
/// Passed to [`Engine::init`](crate::Engine::init).
pub fn install(systems: &mut GlobalSystems<ViewState, GameAction>) {
    actions::install_bindings(systems);

    let scenes = &mut systems.scene_manager;
    scenes.register_default(ViewState::Menu, MenuScreen::new());
    scenes.register_scene(ViewState::Lobby, LobbyScreen::new());
    scenes.register_scene(ViewState::Arena, ArenaScreen::new());
    scenes.register_scene(ViewState::SinglePlayerArena, SinglePlayerArenaScreen::new());

    info!(
        target: "scene",
        "Jetpack Sky Wars installed ({} bindings)",
        systems.input.binding_count()
    );
}
