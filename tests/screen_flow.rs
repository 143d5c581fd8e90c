//=========================================================================
// Screen Flow
//=========================================================================
//
// Drives the installed game headlessly through the core orchestrator:
// key presses in, presentations and active screens out.
//
//=========================================================================

use std::time::Duration;

use jetpack_skywars::core::input::{InputEvent, KeyCode, Modifiers};
use jetpack_skywars::core::CoreSystemsOrchestrator;
use jetpack_skywars::game::{self, GameAction, ViewState};

const DT: Duration = Duration::from_millis(100);

type Game = CoreSystemsOrchestrator<ViewState, GameAction>;

fn new_game() -> Game {
    let mut session = Game::new();
    session.init_systems(game::install);
    session.tick(Vec::new(), DT);
    session
}

fn press(game: &mut Game, key: KeyCode) {
    press_with(game, key, Modifiers::NONE);
}

fn press_with(game: &mut Game, key: KeyCode, modifiers: Modifiers) {
    game.tick(
        vec![vec![
            InputEvent::KeyDown { key, modifiers },
            InputEvent::KeyUp { key, modifiers },
        ]],
        DT,
    );
}

fn idle(game: &mut Game, ticks: usize) -> String {
    let mut last = String::new();
    for _ in 0..ticks {
        game.tick(Vec::new(), DT);
        if let Some(text) = game.take_presentation() {
            last = text;
        }
    }
    last
}

#[test]
fn starts_on_menu() {
    let mut game = new_game();
    assert_eq!(game.active_scene(), Some(ViewState::Menu));

    let text = game.take_presentation().unwrap_or_default();
    assert!(text.contains("Battle Royale"), "{text}");
    assert_eq!(game.context().timers.active_count(), 0);
}

#[test]
fn battle_royale_round_trip() {
    let mut game = new_game();

    press(&mut game, KeyCode::Enter);
    assert_eq!(game.active_scene(), Some(ViewState::Arena));
    assert_eq!(game.context().timers.active_count(), 1);

    let text = idle(&mut game, 1);
    assert!(text.starts_with("JETPACK SKY WARS | 3:00"), "{text}");
    assert!(text.contains("Ammo 30/100"), "{text}");

    press(&mut game, KeyCode::Escape);
    assert_eq!(game.active_scene(), Some(ViewState::Menu));
    assert_eq!(game.context().timers.active_count(), 0);

    idle(&mut game, 1);
    press(&mut game, KeyCode::Enter);
    assert_eq!(game.active_scene(), Some(ViewState::Arena));
}

#[test]
fn arena_clock_counts_down_in_whole_seconds() {
    let mut game = new_game();
    press(&mut game, KeyCode::KeyQ);
    assert_eq!(game.active_scene(), Some(ViewState::Arena));

    let text = idle(&mut game, 650);
    assert!(text.contains("| 1:55 |"), "{text}");
}

#[test]
fn single_player_arena_starts_fresh() {
    let mut game = new_game();
    press(&mut game, KeyCode::KeyP);
    assert_eq!(game.active_scene(), Some(ViewState::SinglePlayerArena));

    let text = idle(&mut game, 1);
    assert!(text.starts_with("SINGLE PLAYER MODE | 5:00"), "{text}");
    assert!(text.contains("HP 100/100"), "{text}");
    assert!(text.contains("Fuel 75/100"), "{text}");
    assert!(text.contains("Score: 0 |"), "{text}");
    assert!(text.contains("0/3 Bots Defeated"), "{text}");
}

#[test]
fn countdown_stops_at_zero_and_back_cancels_timer() {
    let mut game = new_game();
    press(&mut game, KeyCode::KeyP);

    let text = idle(&mut game, 3_200);
    assert!(text.starts_with("SINGLE PLAYER MODE | 0:00"), "{text}");

    press(&mut game, KeyCode::Escape);
    assert_eq!(game.active_scene(), Some(ViewState::Menu));
    assert_eq!(game.context().timers.active_count(), 0);
}

#[test]
fn lobby_name_entry_and_back() {
    let mut game = new_game();
    press(&mut game, KeyCode::KeyC);
    assert_eq!(game.active_scene(), Some(ViewState::Lobby));
    idle(&mut game, 1);

    press_with(&mut game, KeyCode::KeyA, Modifiers::SHIFT);
    press(&mut game, KeyCode::KeyC);
    press(&mut game, KeyCode::KeyE);
    let text = game.take_presentation().unwrap_or_default();
    assert!(text.contains("SKY-2024"), "{text}");
    assert!(text.contains("Pilot: Ace"), "{text}");

    press(&mut game, KeyCode::Enter);
    assert_eq!(game.active_scene(), Some(ViewState::Lobby));

    press(&mut game, KeyCode::Escape);
    assert_eq!(game.active_scene(), Some(ViewState::Menu));
}

#[test]
fn escape_on_menu_does_nothing() {
    let mut game = new_game();
    press(&mut game, KeyCode::Escape);
    assert_eq!(game.active_scene(), Some(ViewState::Menu));
}

#[test]
fn arrows_change_the_mode_enter_opens() {
    let mut game = new_game();
    press(&mut game, KeyCode::ArrowRight);
    let text = game.take_presentation().unwrap_or_default();
    assert!(text.contains("Team Deathmatch"), "{text}");

    press(&mut game, KeyCode::Enter);
    assert_eq!(game.active_scene(), Some(ViewState::Arena));
}
