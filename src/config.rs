//=========================================================================
// Configuration
//=========================================================================
//
// Plain configuration structs with defaults, passed to `EngineBuilder`.
//
//=========================================================================

/// How the window is shown at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Windowed,
    /// Borderless fullscreen on the current monitor.
    Fullscreen,
}

/// Initial window title, logical size and mode.
///
/// The title is replaced by screen presentations once the logic thread
/// starts ticking; this one is shown until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub mode: WindowMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Jetpack Sky Wars"),
            width: 1280,
            height: 720,
            mode: WindowMode::Windowed,
        }
    }
}
