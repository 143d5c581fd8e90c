//=========================================================================
// Core Systems Orchestrator
//
// Coordinator of every system running on the logic (non-platform) thread.
//
// Responsibilities:
// - Own GlobalSystems (input, scenes) and GlobalContext (shared data)
// - Drain platform events once per tick via the EventCollector
// - Advance logic time by the real time between ticks and run
//   GlobalSystems::update
// - Send the active screen's presentation back to the platform
//
// Notes:
// The orchestrator never touches the window. Everything it learns from
// the platform arrives as `PlatformEvent`s and everything it reports goes
// back as `CoreEvent`s, both over bounded crossbeam channels.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod globals;
pub mod input;
pub mod message_bus;
pub(crate) mod platform_bridge;
pub mod scene;
pub mod time;

//=== Public API ==========================================================

pub use globals::{GlobalContext, GlobalSystems};
pub use input::{Action, InputContext};
pub use scene::{Scene, SceneKey, SceneTransition};

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Sender, TrySendError};
use log::{debug, info, warn};

//=== Internal Imports ====================================================

use input::InputEvent;
use platform_bridge::{CoreEvent, EventCollector, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Drives [`GlobalSystems`] over a [`GlobalContext`], one tick at a time.
///
/// The engine spawns it on the logic thread; tests drive it directly with
/// [`tick`](Self::tick) to run screens headlessly.
pub struct CoreSystemsOrchestrator<S: SceneKey, A: Action> {
    systems: GlobalSystems<S, A>,
    context: GlobalContext,
    started: bool,
}

impl<S: SceneKey, A: Action> CoreSystemsOrchestrator<S, A> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(),
            started: false,
        }
    }

    /// Configures systems (bindings, scene registration).
    pub fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S, A>),
    {
        init_fn(&mut self.systems);
        debug!(
            target: "core",
            "Systems initialized ({} input bindings)",
            self.systems.input.binding_count()
        );
    }

    /// Enters the initial scenes. Runs once; later calls are no-ops.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.systems.scene_manager.start(&mut self.context);
    }

    //--- Ticking ----------------------------------------------------------

    /// Runs one tick with the given input batches and time step.
    ///
    /// Starts the scene manager on first use.
    pub fn tick(&mut self, batches: Vec<Vec<InputEvent>>, dt: Duration) {
        self.start();
        self.context.frame_input_events = batches;
        self.systems.update(&mut self.context, dt);
    }

    /// Exits every active scene, releasing whatever they hold while shown.
    pub fn shutdown(&mut self) {
        self.context.message_bus.push(SceneTransition::<S>::Clear);
        self.systems.scene_manager.process_transitions(&mut self.context);
    }

    /// Presentation produced during the last tick(s), if any.
    pub fn take_presentation(&mut self) -> Option<String> {
        self.context.take_presentation()
    }

    //--- Queries ----------------------------------------------------------

    pub fn active_scene(&self) -> Option<S> {
        self.systems.scene_manager.active_scene()
    }

    pub fn context(&self) -> &GlobalContext {
        &self.context
    }

    pub fn systems(&self) -> &GlobalSystems<S, A> {
        &self.systems
    }

    //--- Logic Thread -----------------------------------------------------

    /// Spawns the logic thread, ticking at most `tps` times per second.
    ///
    /// Each tick:
    ///  1. Drains platform events (shut down and exit on close/disconnect)
    ///  2. Updates systems by the wall-clock time since the previous tick
    ///  3. Sends the new presentation, dropping it if the platform lags
    ///  4. Sleeps out the rest of the step
    ///
    /// A slow tick is not lost: the next one carries the full delta, so
    /// timers keep pace with the wall clock.
    pub(crate) fn spawn_core_thread(
        mut self,
        mut collector: EventCollector,
        presenter: Sender<CoreEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let step = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            info!(target: "core", "Logic thread running at {} TPS", tps);
            self.start();
            let mut last_tick = Instant::now();

            loop {
                let tick_start = Instant::now();
                let dt = tick_start - last_tick;
                last_tick = tick_start;

                //--- Step 1: Gather platform events -----------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!(target: "core", "Logic thread exiting");
                    self.shutdown();
                    break;
                }

                //--- Step 2: Update systems -------------------------------
                self.tick(collector.take_batches(), dt);

                //--- Step 3: Publish presentation -------------------------
                if let Some(text) = self.take_presentation() {
                    match presenter.try_send(CoreEvent::Present(text)) {
                        Ok(()) | Err(TrySendError::Full(_)) => {}
                        Err(TrySendError::Disconnected(_)) => {
                            warn!(target: "core", "Platform disconnected, dropping presentation");
                        }
                    }
                }

                //--- Step 4: Pacing ---------------------------------------
                let elapsed = tick_start.elapsed();
                if elapsed < step {
                    thread::sleep(step - elapsed);
                }
            }
        })
    }
}

impl<S: SceneKey, A: Action> Default for CoreSystemsOrchestrator<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::platform_bridge::PlatformEvent;
    use crate::core::time::TimerHandle;
    use crossbeam_channel::bounded;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Only,
    }

    impl SceneKey for TestScene {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Ping,
    }

    impl Action for TestAction {}

    struct Counter {
        pings: u32,
    }

    impl Scene<TestScene> for Counter {
        fn update(&mut self, context: &mut GlobalContext) {
            self.pings += context.message_bus.count::<TestAction>() as u32;
            context.present(format!("pings {}", self.pings));
        }
    }

    /// Holds a one-second timer and takes 100 ms per update.
    struct Sluggish {
        timer: Option<TimerHandle>,
        fired: Arc<AtomicU32>,
    }

    impl Scene<TestScene> for Sluggish {
        fn on_enter(&mut self, context: &mut GlobalContext) {
            self.timer = Some(context.timers.start_repeating(Duration::from_secs(1)));
        }

        fn on_exit(&mut self, _context: &mut GlobalContext) {
            self.timer = None;
        }

        fn update(&mut self, context: &mut GlobalContext) {
            thread::sleep(Duration::from_millis(100));
            if let Some(timer) = &self.timer {
                self.fired.fetch_add(context.timers.take_fired(timer), Ordering::SeqCst);
            }
        }
    }

    fn orchestrator() -> CoreSystemsOrchestrator<TestScene, TestAction> {
        let mut orchestrator = CoreSystemsOrchestrator::new();
        orchestrator.init_systems(|systems| {
            systems.input.bind_key(KeyCode::Space, TestAction::Ping, InputContext::Primary);
            systems.scene_manager.register_default(TestScene::Only, Counter { pings: 0 });
        });
        orchestrator
    }

    #[test]
    fn tick_updates_active_scene() {
        let mut orchestrator = orchestrator();
        orchestrator.tick(vec![vec![InputEvent::key_down(KeyCode::Space)]], Duration::from_millis(16));

        assert_eq!(orchestrator.active_scene(), Some(TestScene::Only));
        assert_eq!(orchestrator.take_presentation().as_deref(), Some("pings 1"));
        assert_eq!(orchestrator.take_presentation(), None);
    }

    #[test]
    fn core_thread_presents_and_exits_on_close() {
        let (platform_tx, platform_rx) = bounded(8);
        let (core_tx, core_rx) = bounded(8);

        let handle = orchestrator().spawn_core_thread(EventCollector::new(platform_rx), core_tx, 240.0);

        platform_tx
            .send(PlatformEvent::Inputs {
                discrete: vec![InputEvent::key_down(KeyCode::Space)],
                continuous: vec![],
            })
            .unwrap();

        // Wait until the ping shows up in a presentation
        let mut seen = false;
        for _ in 0..200 {
            match core_rx.recv_timeout(Duration::from_millis(50)) {
                Ok(CoreEvent::Present(text)) if text == "pings 1" => {
                    seen = true;
                    break;
                }
                Ok(_) => continue,
                Err(_) => break,
            }
        }
        assert!(seen, "presentation never reported the ping");

        platform_tx.send(PlatformEvent::WindowClosed).unwrap();
        assert!(handle.join().is_ok());
    }

    #[test]
    fn slow_ticks_keep_timers_on_wall_clock() {
        let fired = Arc::new(AtomicU32::new(0));
        let mut orchestrator = CoreSystemsOrchestrator::<TestScene, TestAction>::new();
        let scene = Sluggish { timer: None, fired: Arc::clone(&fired) };
        orchestrator.init_systems(|systems| systems.scene_manager.register_default(TestScene::Only, scene));

        let (platform_tx, platform_rx) = bounded(8);
        let (core_tx, _core_rx) = bounded(8);
        let handle = orchestrator.spawn_core_thread(EventCollector::new(platform_rx), core_tx, 60.0);

        // Each tick overruns its 16 ms budget roughly sixfold
        thread::sleep(Duration::from_millis(3_600));
        platform_tx.send(PlatformEvent::WindowClosed).unwrap();
        assert!(handle.join().is_ok());

        let n = fired.load(Ordering::SeqCst);
        assert!(n >= 3, "one-second timer fired {n} times in 3.6 s");
    }

    #[test]
    fn shutdown_exits_active_scene() {
        let fired = Arc::new(AtomicU32::new(0));
        let mut orchestrator = CoreSystemsOrchestrator::<TestScene, TestAction>::new();
        let scene = Sluggish { timer: None, fired };
        orchestrator.init_systems(|systems| systems.scene_manager.register_default(TestScene::Only, scene));
        orchestrator.start();
        assert_eq!(orchestrator.context().timers.active_count(), 1);

        orchestrator.shutdown();

        assert_eq!(orchestrator.active_scene(), None);
        assert_eq!(orchestrator.context().timers.active_count(), 0);
    }
}
