//=========================================================================
// View State Machine
//=========================================================================
//
// Which of the four screens is shown, and how selections move between
// them.
//
//   Menu ── select quick-match / battle mode / unknown ──► Arena
//   Menu ── select create-room ─────────────────────────► Lobby
//   Menu ── select single-player ───────────────────────► SinglePlayerArena
//   Lobby | Arena | SinglePlayerArena ── back ──────────► Menu
//
// Transitions are applied by the scene manager as `Replace(from, to)`, so
// the old screen's `on_exit` always runs before the new one's `on_enter`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::scene::{SceneKey, SceneTransition};

//=== ViewState ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Menu,
    Lobby,
    Arena,
    SinglePlayerArena,
}

impl SceneKey for ViewState {}

//=== MenuSelection =======================================================

/// A selection made on the menu, parsed from its identifier.
///
/// Parsing never fails: unknown identifiers become `Other` and route to
/// the arena like any battle mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSelection {
    QuickMatch,
    BattleRoyale,
    TeamDeathmatch,
    FreeForAll,
    CaptureOrb,
    CreateRoom,
    SinglePlayer,
    Other(String),
}

impl MenuSelection {
    pub fn id(&self) -> &str {
        match self {
            Self::QuickMatch => "quick-match",
            Self::BattleRoyale => "battle-royale",
            Self::TeamDeathmatch => "team-deathmatch",
            Self::FreeForAll => "free-for-all",
            Self::CaptureOrb => "capture-orb",
            Self::CreateRoom => "create-room",
            Self::SinglePlayer => "single-player",
            Self::Other(id) => id,
        }
    }

    /// Screen this selection opens.
    pub fn target(&self) -> ViewState {
        match self {
            Self::CreateRoom => ViewState::Lobby,
            Self::SinglePlayer => ViewState::SinglePlayerArena,
            Self::QuickMatch
            | Self::BattleRoyale
            | Self::TeamDeathmatch
            | Self::FreeForAll
            | Self::CaptureOrb
            | Self::Other(_) => ViewState::Arena,
        }
    }
}

impl FromStr for MenuSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "quick-match" => Self::QuickMatch,
            "battle-royale" => Self::BattleRoyale,
            "team-deathmatch" => Self::TeamDeathmatch,
            "free-for-all" => Self::FreeForAll,
            "capture-orb" => Self::CaptureOrb,
            "create-room" => Self::CreateRoom,
            "single-player" => Self::SinglePlayer,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for MenuSelection {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(selection) => selection,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for MenuSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

//=== ViewEvent ===========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Select(MenuSelection),
    Back,
}

impl ViewState {
    /// State after `event`.
    ///
    /// Selections only count on the menu; `Back` on the menu stays put.
    pub fn next(self, event: &ViewEvent) -> ViewState {
        match (self, event) {
            (ViewState::Menu, ViewEvent::Select(selection)) => selection.target(),
            (_, ViewEvent::Back) => ViewState::Menu,
            (state, ViewEvent::Select(selection)) => {
                debug!(target: "scene", "Ignoring selection {} outside the menu ({:?})", selection, state);
                state
            }
        }
    }
}

/// Scene transition for `event` from `from`, or `None` if nothing changes.
pub fn transition(from: ViewState, event: &ViewEvent) -> Option<SceneTransition<ViewState>> {
    let to = from.next(event);
    (to != from).then_some(SceneTransition::Replace(from, to))
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn select(id: &str) -> ViewEvent {
        ViewEvent::Select(MenuSelection::from(id))
    }

    #[test]
    fn starts_at_menu() {
        assert_eq!(ViewState::default(), ViewState::Menu);
    }

    #[test]
    fn battle_modes_open_arena() {
        for id in ["quick-match", "battle-royale", "team-deathmatch", "free-for-all", "capture-orb"] {
            assert_eq!(ViewState::Menu.next(&select(id)), ViewState::Arena, "{id}");
        }
    }

    #[test]
    fn create_room_opens_lobby() {
        assert_eq!(ViewState::Menu.next(&select("create-room")), ViewState::Lobby);
    }

    #[test]
    fn single_player_opens_single_player_arena() {
        assert_eq!(
            ViewState::Menu.next(&select("single-player")),
            ViewState::SinglePlayerArena
        );
    }

    #[test]
    fn unknown_selection_defaults_to_arena() {
        let selection = MenuSelection::from("orbital-racing");
        assert_eq!(selection, MenuSelection::Other("orbital-racing".to_string()));
        assert_eq!(selection.id(), "orbital-racing");
        assert_eq!(ViewState::Menu.next(&ViewEvent::Select(selection)), ViewState::Arena);
        assert_eq!(ViewState::Menu.next(&select("")), ViewState::Arena);
    }

    #[test]
    fn back_returns_to_menu_from_every_screen() {
        for state in [ViewState::Lobby, ViewState::Arena, ViewState::SinglePlayerArena] {
            assert_eq!(state.next(&ViewEvent::Back), ViewState::Menu);
        }
        assert_eq!(ViewState::Menu.next(&ViewEvent::Back), ViewState::Menu);
    }

    #[test]
    fn selections_outside_menu_are_ignored() {
        assert_eq!(ViewState::Arena.next(&select("create-room")), ViewState::Arena);
        assert_eq!(ViewState::Lobby.next(&select("single-player")), ViewState::Lobby);
    }

    #[test]
    fn ids_round_trip_through_parse() {
        for id in ["quick-match", "create-room", "single-player", "capture-orb"] {
            assert_eq!(MenuSelection::from(id).to_string(), id);
        }
    }

    #[test]
    fn transition_replaces_current_screen() {
        assert_eq!(
            transition(ViewState::Menu, &select("create-room")),
            Some(SceneTransition::Replace(ViewState::Menu, ViewState::Lobby))
        );
        assert_eq!(transition(ViewState::Menu, &ViewEvent::Back), None);
    }

    #[test]
    fn machine_is_cyclic() {
        let mut state = ViewState::Menu;
        for id in ["battle-royale", "create-room", "single-player", "quick-match"] {
            state = state.next(&select(id));
            assert_ne!(state, ViewState::Menu);
            state = state.next(&ViewEvent::Back);
            assert_eq!(state, ViewState::Menu);
        }
    }
}
