//=========================================================================
// Screens
//=========================================================================
//
// One `Scene` per `ViewState`. Each screen reads this tick's
// `GameAction`s from the bus, turns navigation into a `ViewEvent`, and
// publishes a one-line presentation.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;

use super::actions::GameAction;
use super::view::{self, ViewEvent, ViewState};

//=== Module Declarations =================================================

mod arena;
mod lobby;
mod menu;
mod single_player;

//=== Public API ==========================================================

pub use arena::ArenaScreen;
pub use lobby::LobbyScreen;
pub use menu::MenuScreen;
pub use single_player::SinglePlayerArenaScreen;

//=== Helpers =============================================================

/// This tick's actions, copied off the bus so the context can be mutated
/// while handling them.
fn tick_actions(context: &GlobalContext) -> Vec<GameAction> {
    context.message_bus.read::<GameAction>().to_vec()
}

/// Requests the screen change `event` causes from `from`, if any.
fn navigate(context: &mut GlobalContext, from: ViewState, event: ViewEvent) -> bool {
    match view::transition(from, &event) {
        Some(transition) => {
            info!(target: "scene", "{:?} --{:?}--> {:?}", from, event, from.next(&event));
            context.request_transition(transition);
            true
        }
        None => false,
    }
}
