//=========================================================================
// Jetpack Sky Wars
//=========================================================================
//
// Opens the game window on the menu. Log filtering via `RUST_LOG`
// (default `info`).
//
//=========================================================================

use jetpack_skywars::game::{self, GameAction, ViewState};
use jetpack_skywars::EngineBuilder;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    EngineBuilder::<ViewState, GameAction>::new()
        .build()
        .init(game::install)
        .run()?;

    Ok(())
}
