//=========================================================================
// Engine
//
// Entry point that wires the platform and logic threads together.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init(): bindings, screens
//         ├─ with_channel_capacity() └─ run(): spawn logic thread,
//         └─ with_window()                    run platform, join
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::WindowConfig;
use crate::core::platform_bridge::{EventCollector, PlatformError};
use crate::core::{Action, CoreSystemsOrchestrator, GlobalSystems, SceneKey};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 messages
/// - **Window**: [`WindowConfig::default`]
///
/// # Examples
///
/// ```no_run
/// use jetpack_skywars::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Screen { Title }
/// impl SceneKey for Screen {}
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Command { Start }
/// impl Action for Command {}
///
/// EngineBuilder::<Screen, Command>::new()
///     .with_tps(120.0)
///     .with_window(WindowConfig { title: "Demo".into(), ..Default::default() })
///     .build()
///     .run()
///     .expect("platform failed");
/// ```
pub struct EngineBuilder<S: SceneKey, A: Action> {
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
    _phantom: std::marker::PhantomData<(S, A)>,
}

impl<S: SceneKey, A: Action> EngineBuilder<S, A> {
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowConfig::default(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the logic tick rate. Also the HUD timer resolution.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of both platform ↔ core channels.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    pub fn build(self) -> Engine<S, A> {
        info!(
            target: "engine",
            "Building engine (TPS: {}, channel: {}, window: {}x{})",
            self.tps,
            self.channel_capacity,
            self.window.width,
            self.window.height
        );

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl<S: SceneKey, A: Action> Default for EngineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Engine runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, SceneManager, screens
///   │
///   └─► Platform (winit event loop)
///         └─► Window, input polling, title
///
/// Communication: bounded crossbeam channels
///   PlatformEvent (platform → core), CoreEvent (core → platform)
/// ```
pub struct Engine<S: SceneKey, A: Action> {
    orchestrator: CoreSystemsOrchestrator<S, A>,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl<S: SceneKey, A: Action> Engine<S, A> {
    //--- Initialization ---------------------------------------------------

    /// Configures bindings and registers screens before running.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        info!(target: "engine", "Initializing engine systems");
        self.orchestrator.init_systems(init_fn);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs until the window closes, then joins the logic thread.
    ///
    /// # Errors
    ///
    /// Returns the [`PlatformError`] if the event loop could not run. The
    /// logic thread is still shut down and joined first.
    pub fn run(self) -> Result<(), PlatformError> {
        info!(target: "engine", "Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Channels --------------------------------------------------
        let (event_tx, event_rx) = bounded(self.channel_capacity);
        let (present_tx, present_rx) = bounded(self.channel_capacity);

        //--- 2. Logic thread ----------------------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(
            EventCollector::new(event_rx),
            present_tx,
            self.tps,
        );

        //--- 3. Platform (blocks) -----------------------------------------
        // The platform owns the only event sender; dropping it on return
        // disconnects the channel and stops the logic thread.
        let result = Platform::new(self.window, event_tx, present_rx).run();
        if let Err(e) = &result {
            error!(target: "engine", "Platform error: {}", e);
        }

        //--- 4. Join ------------------------------------------------------
        match core_handle.join() {
            Ok(()) => info!(target: "engine", "Core thread terminated cleanly"),
            Err(e) => error!(target: "engine", "Core thread panicked: {:?}", e),
        }

        info!(target: "engine", "Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
