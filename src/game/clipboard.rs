//=========================================================================
// Clipboard
//=========================================================================
//
// Text-only clipboard writes. The lobby copies its room code through a
// `ClipboardSink`; failures are logged and swallowed.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};
use thiserror::Error;

//=== ClipboardError ======================================================

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Clipboard write failed: {0}")]
    Write(#[source] arboard::Error),
}

//=== ClipboardSink =======================================================

pub trait ClipboardSink: Send {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard.
///
/// A fresh `arboard::Clipboard` is opened per write; holding one open on
/// the logic thread ties it to a display connection for the whole run.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?;
        clipboard.set_text(text.to_owned()).map_err(ClipboardError::Write)
    }
}

/// Writes `text`, logging instead of returning any failure.
pub fn copy_or_warn(sink: &mut dyn ClipboardSink, text: &str) -> bool {
    match sink.set_text(text) {
        Ok(()) => {
            debug!(target: "clipboard", "Copied {:?}", text);
            true
        }
        Err(e) => {
            warn!(target: "clipboard", "Could not copy {:?}: {}", text, e);
            false
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
