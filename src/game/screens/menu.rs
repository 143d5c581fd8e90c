//=========================================================================
// Menu Screen
//=========================================================================
//
// Battle mode cards, quick actions, leaderboard and pilot profile.
// Arrow keys move the highlight; Enter or a quick-action key leaves the
// menu.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::scene::Scene;
use crate::game::actions::{GameAction, MENU};
use crate::game::content::{
    GameMode, LeaderboardEntry, PilotProfile, DEFAULT_MODE, GAME_MODES, LEADERBOARD,
    PILOT_PROFILE, PLAYERS_ONLINE,
};
use crate::game::hud::group_thousands;
use crate::game::view::{MenuSelection, ViewEvent, ViewState};

use super::{navigate, tick_actions};

//=== MenuScreen ==========================================================

pub struct MenuScreen {
    selected: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected: default_index() }
    }

    /// Highlighted battle mode.
    pub fn selected_mode(&self) -> &'static GameMode {
        &GAME_MODES[self.selected]
    }

    pub fn leaderboard(&self) -> &'static [LeaderboardEntry] {
        &LEADERBOARD
    }

    pub fn profile(&self) -> &'static PilotProfile {
        &PILOT_PROFILE
    }

    fn step(&mut self, forward: bool) {
        let len = GAME_MODES.len();
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
        debug!(target: "scene", "Menu highlight → {}", self.selected_mode().id);
    }

    fn presentation(&self) -> String {
        let mode = self.selected_mode();
        let leader = &LEADERBOARD[0];
        format!(
            "Jetpack Sky Wars | Mode: {} ({}, {}){} | {} pilots online | #1 {} {} | {} Lv.{}",
            mode.name,
            mode.difficulty,
            mode.player_count,
            if mode.popular { " [Popular]" } else { "" },
            group_thousands(u64::from(PLAYERS_ONLINE)),
            leader.name,
            group_thousands(u64::from(leader.score)),
            PILOT_PROFILE.callsign,
            PILOT_PROFILE.level,
        )
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn default_index() -> usize {
    GAME_MODES.iter().position(|mode| mode.id == DEFAULT_MODE).unwrap_or(0)
}

impl Scene<ViewState> for MenuScreen {
    fn on_enter(&mut self, context: &mut GlobalContext) {
        self.selected = default_index();
        context.input_context = MENU;
    }

    fn update(&mut self, context: &mut GlobalContext) {
        for action in tick_actions(context) {
            let selection = match action {
                GameAction::PreviousMode => {
                    self.step(false);
                    continue;
                }
                GameAction::NextMode => {
                    self.step(true);
                    continue;
                }
                GameAction::Confirm => MenuSelection::from(self.selected_mode().id),
                GameAction::QuickMatch => MenuSelection::QuickMatch,
                GameAction::CreateRoom => MenuSelection::CreateRoom,
                GameAction::SinglePlayer => MenuSelection::SinglePlayer,
                _ => continue,
            };

            if navigate(context, ViewState::Menu, ViewEvent::Select(selection)) {
                return;
            }
        }

        context.present(self.presentation());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
