//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS window and input) with the logic thread.
//
// Architecture:
// ```text
//  Main Thread:                        Logic Thread:
//  ┌─────────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop           │    │  Orchestrator        │
//  │   ↓                         │    │   ├─ InputSystem     │
//  │  InputProcessor             │    │   ├─ SceneManager    │
//  │   ↓                         │    │   └─ Screens         │
//  │  InputBuffer                │    │                      │
//  │   ↓                         │    │                      │
//  │  RedrawRequested ─ flush ───┼───►│  PlatformEvent       │
//  │   ↑                         │    │                      │
//  │  window title ◄─────────────┼────┤  CoreEvent::Present  │
//  └─────────────────────────────┘    └──────────────────────┘
// ```
//
// Frame boundary is RedrawRequested: buffered input is sent in one
// message, then the latest presentation (if any) becomes the title.
// A dead logic thread is logged, not fatal, so the window can still close.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::config::{WindowConfig, WindowMode};
use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and input aggregator. Must stay on the main thread.
pub(crate) struct Platform {
    config: WindowConfig,

    /// Created lazily in `resumed()`.
    window: Option<Window>,

    /// Title currently shown, to skip redundant OS calls.
    title: String,

    buffer: InputBuffer,
    input_processor: InputProcessor,

    event_sender: Sender<PlatformEvent>,
    presentations: Receiver<CoreEvent>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        config: WindowConfig,
        event_sender: Sender<PlatformEvent>,
        presentations: Receiver<CoreEvent>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            title: config.title.clone(),
            config,
            window: None,
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            event_sender,
            presentations,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// terminates abnormally.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends this frame's input to the logic thread (idle frames send nothing).
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };

        let (discrete_count, continuous_count) = (discrete.len(), continuous.len());
        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                discrete_count + continuous_count
            );
        }
    }

    /// Applies the newest presentation, skipping stale ones.
    ///
    /// Returns the title to show if it changed.
    fn poll_presentation(&mut self) -> Option<&str> {
        let latest = self
            .presentations
            .try_iter()
            .map(|CoreEvent::Present(text)| text)
            .last()?;

        if latest == self.title {
            return None;
        }

        self.title = latest;
        Some(&self.title)
    }

    fn window_attributes(&self) -> WindowAttributes {
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match self.config.mode {
            WindowMode::Windowed => attrs,
            WindowMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        match event_loop.create_window(self.window_attributes()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_mouse_move(position.x as f32, position.y as f32);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(key_event) {
                    Some(event) => self.buffer.push_discrete(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if let Some(title) = self.poll_presentation().map(str::to_owned) {
                    if let Some(window) = &self.window {
                        window.set_title(&title);
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{InputEvent, KeyCode};
    use crossbeam_channel::unbounded;

    struct Harness {
        platform: Platform,
        events: Receiver<PlatformEvent>,
        presenter: Sender<CoreEvent>,
    }

    fn harness() -> Harness {
        let (event_tx, events) = unbounded();
        let (presenter, presentations) = unbounded();
        Harness {
            platform: Platform::new(WindowConfig::default(), event_tx, presentations),
            events,
            presenter,
        }
    }

    #[test]
    fn window_is_created_lazily() {
        let h = harness();
        assert!(h.platform.window.is_none());
        assert_eq!(h.platform.title, "Jetpack Sky Wars");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let mut h = harness();
        h.platform.flush_input_buffer();
        assert!(h.events.try_recv().is_err());
    }

    #[test]
    fn flush_sends_buffered_input_once() {
        let mut h = harness();
        h.platform.buffer.push_discrete(InputEvent::key_down(KeyCode::Enter));

        h.platform.flush_input_buffer();
        h.platform.flush_input_buffer();

        match h.events.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete, vec![InputEvent::key_down(KeyCode::Enter)]);
                assert!(continuous.is_empty());
            }
            other => panic!("expected Inputs, got {:?}", other),
        }
        assert!(h.events.try_recv().is_err());
    }

    #[test]
    fn flush_survives_disconnected_core() {
        let mut h = harness();
        h.platform.buffer.push_discrete(InputEvent::key_down(KeyCode::Space));
        drop(h.events);

        h.platform.flush_input_buffer();
    }

    #[test]
    fn newest_presentation_wins() {
        let mut h = harness();
        h.presenter.send(CoreEvent::Present("Menu".to_string())).unwrap();
        h.presenter.send(CoreEvent::Present("Arena".to_string())).unwrap();

        assert_eq!(h.platform.poll_presentation(), Some("Arena"));
        assert_eq!(h.platform.poll_presentation(), None);
    }

    #[test]
    fn unchanged_presentation_is_skipped() {
        let mut h = harness();
        h.presenter.send(CoreEvent::Present("Jetpack Sky Wars".to_string())).unwrap();
        assert_eq!(h.platform.poll_presentation(), None);
    }
}
