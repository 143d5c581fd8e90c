//=========================================================================
// Lobby Screen
//=========================================================================
//
// Room roster, room code and pilot name entry. Nothing here talks to a
// server: the roster is seed data and "join"/"start" are only logged.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::KeyCode;
use crate::core::scene::Scene;
use crate::game::actions::{GameAction, LOBBY};
use crate::game::clipboard::{copy_or_warn, ClipboardSink, SystemClipboard};
use crate::game::content::{lobby_roster, Player, ARENA_INFO, ROOM_CAPACITY, ROOM_CODE};
use crate::game::view::{ViewEvent, ViewState};

use super::{navigate, tick_actions};

//=== Constants ===========================================================

pub const MAX_PILOT_NAME_LEN: usize = 16;

//=== LobbyScreen =========================================================

pub struct LobbyScreen {
    roster: Vec<Player>,
    pilot_name: String,
    clipboard: Box<dyn ClipboardSink>,
}

impl LobbyScreen {
    pub fn new() -> Self {
        Self::with_clipboard(Box::new(SystemClipboard))
    }

    pub fn with_clipboard(clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            roster: lobby_roster(),
            pilot_name: String::new(),
            clipboard,
        }
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn pilot_name(&self) -> &str {
        &self.pilot_name
    }

    pub fn room_code(&self) -> &'static str {
        ROOM_CODE
    }

    /// Applies this tick's typed characters to the pilot name.
    fn edit_name(&mut self, context: &GlobalContext) {
        for &(key, modifiers) in context.input_state.keys_pressed() {
            if modifiers.ctrl || modifiers.alt {
                continue;
            }
            if key == KeyCode::Backspace {
                self.pilot_name.pop();
            } else if let Some(c) = key.to_char(modifiers.shift) {
                if self.pilot_name.chars().count() < MAX_PILOT_NAME_LEN {
                    self.pilot_name.push(c);
                }
            }
        }
    }

    fn presentation(&self) -> String {
        let ready = self.roster.iter().filter(|p| p.ready).count();
        let host = self
            .roster
            .iter()
            .find(|p| p.host)
            .map_or("-", |p| p.name.as_str());
        let name = if self.pilot_name.is_empty() {
            "<enter your pilot name>"
        } else {
            self.pilot_name.as_str()
        };

        format!(
            "Sky Battle Arena {} | Players {}/{} ({} ready, host {}) | {} | Pilot: {}",
            ROOM_CODE,
            self.roster.len(),
            ROOM_CAPACITY,
            ready,
            host,
            ARENA_INFO.map,
            name,
        )
    }
}

impl Default for LobbyScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<ViewState> for LobbyScreen {
    fn on_enter(&mut self, context: &mut GlobalContext) {
        self.roster = lobby_roster();
        self.pilot_name.clear();
        context.input_context = LOBBY;
    }

    fn update(&mut self, context: &mut GlobalContext) {
        self.edit_name(context);

        for action in tick_actions(context) {
            match action {
                GameAction::Back => {
                    if navigate(context, ViewState::Lobby, ViewEvent::Back) {
                        return;
                    }
                }
                GameAction::CopyRoomCode => {
                    copy_or_warn(self.clipboard.as_mut(), ROOM_CODE);
                }
                GameAction::JoinBattle => {
                    info!(target: "scene", "Join battle requested as {:?} (no match server)", self.pilot_name);
                }
                GameAction::StartBattle => {
                    info!(
                        target: "scene",
                        "Start battle requested in room {} with {} players (no match server)",
                        ROOM_CODE,
                        self.roster.len()
                    );
                }
                _ => {}
            }
        }

        context.present(self.presentation());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
