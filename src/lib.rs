//=========================================================================
// Jetpack Sky Wars: Library Root
//
// Front-end for a jetpack battle game: a main menu, a room lobby and two
// decorative 3D arenas with simulated HUDs, all on local mock state.
//
// Layout:
// - `core`: logic-thread systems (input, scenes, message bus, time)
// - `game`: the four screens, their content, entities and HUD
// - `engine`: builder and runtime tying the platform and logic threads
// - `platform` (private): winit window and input translation
//
// Typical usage:
// ```no_run
// use jetpack_skywars::{game, EngineBuilder};
//
// fn main() -> anyhow::Result<()> {
//     EngineBuilder::new().build().init(game::install).run()?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod config;
pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::config::{WindowConfig, WindowMode};
pub use crate::core::platform_bridge::PlatformError;
pub use crate::engine::{Engine, EngineBuilder};
