//=========================================================================
// Prelude
//=========================================================================
//
// Re-exports of the types needed to write screens and configure the engine.
//
// Usage:
//   use jetpack_skywars::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine and configuration
pub use crate::config::{WindowConfig, WindowMode};
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{Action, InputContext, KeyCode, Modifiers, MouseButton};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneManager, SceneTransition};

// Message bus and time
pub use crate::core::message_bus::MessageBus;
pub use crate::core::time::{FrameClock, TimerHandle, Timers};
