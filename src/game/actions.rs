//=========================================================================
// Game Actions & Bindings
//=========================================================================
//
// Commands the screens react to, and the key bindings of each screen's
// input context.
//
//   MENU  : ←/↑ previous mode, →/↓ next mode, Enter confirm,
//           Q quick match, C create room, P single player
//   LOBBY : Esc back, Ctrl+C copy room code, Enter join battle,
//           Ctrl+Enter start battle
//   ARENA : Esc back
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalSystems;
use crate::core::input::{Action, InputContext, KeyCode, Modifiers};

use super::view::ViewState;

//=== GameAction ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    PreviousMode,
    NextMode,
    Confirm,
    QuickMatch,
    CreateRoom,
    SinglePlayer,
    Back,
    CopyRoomCode,
    JoinBattle,
    StartBattle,
}

impl Action for GameAction {}

//=== Contexts ============================================================

pub const MENU: InputContext = InputContext::Primary;
pub const LOBBY: InputContext = InputContext::custom(0);
pub const ARENA: InputContext = InputContext::custom(1);

//=== Bindings ============================================================

pub fn install_bindings(systems: &mut GlobalSystems<ViewState, GameAction>) {
    let input = &mut systems.input;

    //--- Menu -------------------------------------------------------------
    input.bind_key(KeyCode::ArrowLeft, GameAction::PreviousMode, MENU);
    input.bind_key(KeyCode::ArrowUp, GameAction::PreviousMode, MENU);
    input.bind_key(KeyCode::ArrowRight, GameAction::NextMode, MENU);
    input.bind_key(KeyCode::ArrowDown, GameAction::NextMode, MENU);
    input.bind_key(KeyCode::Enter, GameAction::Confirm, MENU);
    input.bind_key(KeyCode::KeyQ, GameAction::QuickMatch, MENU);
    input.bind_key(KeyCode::KeyC, GameAction::CreateRoom, MENU);
    input.bind_key(KeyCode::KeyP, GameAction::SinglePlayer, MENU);

    //--- Lobby ------------------------------------------------------------
    input.bind_key(KeyCode::Escape, GameAction::Back, LOBBY);
    input.bind_key_with_mods(KeyCode::KeyC, Modifiers::CTRL, GameAction::CopyRoomCode, LOBBY);
    input.bind_key(KeyCode::Enter, GameAction::JoinBattle, LOBBY);
    input.bind_key_with_mods(KeyCode::Enter, Modifiers::CTRL, GameAction::StartBattle, LOBBY);

    //--- Arenas -----------------------------------------------------------
    input.bind_key(KeyCode::Escape, GameAction::Back, ARENA);
}

//=========================================================================
// Unit Tests
//=========================================================================
