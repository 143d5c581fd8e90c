//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages and errors shared by the platform and core threads.
//
//   platform ── PlatformEvent ──► core
//   platform ◄──── CoreEvent ──── core
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input batched over one platform frame.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}

//=== CoreEvent ===========================================================

/// Events sent from core back to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CoreEvent {
    /// New one-line description of the active screen (window title).
    Present(String),
}

//=== PlatformError =======================================================

/// Fatal platform failures. Once the event loop runs, errors are logged
/// instead of returned.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(String),

    #[error("Event loop error: {0}")]
    EventLoopExecution(String),
}

//=========================================================================
// Unit Tests
//=========================================================================
