//=========================================================================
// Scene Manager
//=========================================================================
//
// Scene registration, stack operations and lifecycle.
//
// Scenes live in a HashMap by key and are referenced from a stack of keys,
// so a screen keeps its state between visits.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::globals::GlobalContext;

//=== Scene Transition ====================================================

/// Scene stack operation, requested through the message bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Swaps `.0` for `.1` in place (exit old, then enter new).
    Replace(K, K),

    /// Exits and removes every scene.
    Clear,
}

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers, usually a game-side enum.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Owns every registered scene and the stack of active ones.
///
/// The topmost scene is the screen the player sees. Transitions queued
/// during a tick are applied after all scenes have updated.
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    stack: Vec<S>,
}

impl<S: SceneKey> SceneManager<S> {
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            stack: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene under `key`, replacing any previous one.
    ///
    /// ```rust
    /// # use jetpack_skywars::prelude::*;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum Screen { Title }
    /// # impl SceneKey for Screen {}
    /// # struct TitleScreen;
    /// # impl Scene<Screen> for TitleScreen {
    /// #     fn update(&mut self, _ctx: &mut GlobalContext) {}
    /// # }
    /// let mut manager = SceneManager::new();
    /// manager.register_scene(Screen::Title, TitleScreen);
    /// assert!(manager.is_registered(Screen::Title));
    /// ```
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!(target: "scene", "Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and makes it the initial stack entry.
    ///
    /// Its `on_enter` runs when the engine starts ticking.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        self.register_scene(key, scene);

        if self.stack.contains(&key) {
            warn!(target: "scene", "Scene {:?} is already in the stack", key);
        } else {
            debug!(target: "scene", "Registered {:?} as default scene", key);
            self.stack.push(key);
        }
    }

    /// Enters every scene already on the stack, bottom-up.
    pub fn start(&mut self, context: &mut GlobalContext) {
        let initial = self.stack.clone();
        if initial.is_empty() {
            warn!(target: "scene", "Scene manager started with an empty stack");
        }

        for key in initial {
            info!(target: "scene", "Entering initial scene {:?}", key);
            match self.scenes.get_mut(&key) {
                Some(scene) => scene.on_enter(context),
                None => warn!(target: "scene", "Initial scene {:?} not registered", key),
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Key of the topmost scene.
    pub fn active_scene(&self) -> Option<S> {
        self.stack.last().copied()
    }

    pub fn stack(&self) -> &[S] {
        &self.stack
    }

    pub fn is_registered(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates the topmost scene. Scenes below it are paused.
    pub fn update(&mut self, context: &mut GlobalContext) {
        let Some(key) = self.active_scene() else {
            return;
        };

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.update(context);
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies every transition queued on the bus this tick, in FIFO order.
    pub fn process_transitions(&mut self, context: &mut GlobalContext) {
        for transition in context.message_bus.take::<SceneTransition<S>>() {
            match transition {
                SceneTransition::Replace(old_key, new_key) => {
                    self.replace_internal(old_key, new_key, context)
                }
                SceneTransition::Clear => self.clear_internal(context),
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn replace_internal(&mut self, old_key: S, new_key: S, context: &mut GlobalContext) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!(target: "scene", "Scene {:?} not in stack, skipping replacement", old_key);
            return;
        };

        if self.stack.contains(&new_key) {
            warn!(target: "scene", "Scene {:?} is already in the stack, skipping replacement", new_key);
            return;
        }

        if !self.scenes.contains_key(&new_key) {
            warn!(target: "scene", "Attempted to replace with unregistered scene {:?}", new_key);
            return;
        }

        info!(target: "scene", "Scene {:?} → {:?}", old_key, new_key);

        if let Some(scene) = self.scenes.get_mut(&old_key) {
            scene.on_exit(context);
        }

        self.stack[pos] = new_key;

        if let Some(scene) = self.scenes.get_mut(&new_key) {
            scene.on_enter(context);
        }
    }

    fn clear_internal(&mut self, context: &mut GlobalContext) {
        debug!(target: "scene", "Clearing scene stack");

        // Top-down, mirroring the order scenes were entered
        for key in self.stack.drain(..).rev() {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
        }
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
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
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
        C,
    }

    impl SceneKey for TestScene {}

    type Log = Arc<Mutex<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl Recorder {
        fn new(name: &'static str, log: &Log) -> Self {
            Self { name, log: Arc::clone(log) }
        }

        fn record(&self, what: &str) {
            self.log.lock().unwrap().push(format!("{}:{}", self.name, what));
        }
    }

    impl Scene<TestScene> for Recorder {
        fn on_enter(&mut self, _context: &mut GlobalContext) {
            self.record("enter");
        }

        fn on_exit(&mut self, _context: &mut GlobalContext) {
            self.record("exit");
        }

        fn update(&mut self, _context: &mut GlobalContext) {
            self.record("update");
        }
    }

    fn setup() -> (SceneManager<TestScene>, GlobalContext, Log) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut manager = SceneManager::new();
        manager.register_default(TestScene::A, Recorder::new("A", &log));
        manager.register_scene(TestScene::B, Recorder::new("B", &log));
        manager.register_scene(TestScene::C, Recorder::new("C", &log));
        (manager, GlobalContext::new(), log)
    }

    fn drain(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.lock().unwrap())
    }

    fn request(context: &mut GlobalContext, transition: SceneTransition<TestScene>) {
        context.message_bus.push(transition);
    }

    //--- Lifecycle --------------------------------------------------------

    #[test]
    fn start_enters_default_scene() {
        let (mut manager, mut context, log) = setup();
        manager.start(&mut context);

        assert_eq!(manager.active_scene(), Some(TestScene::A));
        assert_eq!(drain(&log), vec!["A:enter"]);
    }

    #[test]
    fn replace_exits_old_before_entering_new() {
        let (mut manager, mut context, log) = setup();
        manager.start(&mut context);
        drain(&log);

        request(&mut context, SceneTransition::Replace(TestScene::A, TestScene::B));
        manager.process_transitions(&mut context);

        assert_eq!(drain(&log), vec!["A:exit", "B:enter"]);
        assert_eq!(manager.stack(), &[TestScene::B]);
        assert!(!context.message_bus.has_messages::<SceneTransition<TestScene>>());
    }

    #[test]
    fn replace_with_unregistered_or_missing_is_ignored() {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let mut manager = SceneManager::new();
        let mut context = GlobalContext::new();
        manager.register_default(TestScene::A, Recorder::new("A", &log));
        manager.start(&mut context);
        drain(&log);

        request(&mut context, SceneTransition::Replace(TestScene::A, TestScene::B));
        request(&mut context, SceneTransition::Replace(TestScene::C, TestScene::A));
        manager.process_transitions(&mut context);

        assert_eq!(manager.stack(), &[TestScene::A]);
        assert!(drain(&log).is_empty());
    }

    #[test]
    fn transitions_apply_in_fifo_order() {
        let (mut manager, mut context, log) = setup();
        manager.start(&mut context);
        drain(&log);

        request(&mut context, SceneTransition::Replace(TestScene::A, TestScene::B));
        request(&mut context, SceneTransition::Replace(TestScene::B, TestScene::A));
        manager.process_transitions(&mut context);

        assert_eq!(drain(&log), vec!["A:exit", "B:enter", "B:exit", "A:enter"]);
        assert_eq!(manager.active_scene(), Some(TestScene::A));
    }

    #[test]
    fn clear_exits_the_active_scene() {
        let (mut manager, mut context, log) = setup();
        manager.start(&mut context);
        request(&mut context, SceneTransition::Replace(TestScene::A, TestScene::B));
        manager.process_transitions(&mut context);
        drain(&log);

        request(&mut context, SceneTransition::Clear);
        manager.process_transitions(&mut context);

        assert_eq!(drain(&log), vec!["B:exit"]);
        assert_eq!(manager.active_scene(), None);

        // Nothing left to update
        manager.update(&mut context);
        assert!(drain(&log).is_empty());
    }

    //--- Update -----------------------------------------------------------

    #[test]
    fn update_runs_only_the_active_scene() {
        let (mut manager, mut context, log) = setup();
        manager.start(&mut context);
        request(&mut context, SceneTransition::Replace(TestScene::A, TestScene::C));
        manager.process_transitions(&mut context);
        drain(&log);

        manager.update(&mut context);
        assert_eq!(drain(&log), vec!["C:update"]);
    }
}
