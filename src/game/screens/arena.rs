//=========================================================================
// Arena Screen
//=========================================================================
//
// Multiplayer arena: the animated backdrop plus the multiplayer HUD.
// The HUD, and with it the one-second timer, exists only between
// `on_enter` and `on_exit`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::scene::Scene;
use crate::game::actions::{GameAction, ARENA};
use crate::game::composer::SceneComposer;
use crate::game::content::control_legend;
use crate::game::hud::Hud;
use crate::game::view::{ViewEvent, ViewState};

use super::{navigate, tick_actions};

//=== ArenaScreen =========================================================

pub struct ArenaScreen {
    composer: SceneComposer,
    hud: Option<Hud>,
    mounted_at: Duration,
}

impl ArenaScreen {
    pub fn new() -> Self {
        Self {
            composer: SceneComposer::multiplayer(),
            hud: None,
            mounted_at: Duration::ZERO,
        }
    }

    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    /// The HUD, while the arena is shown.
    pub fn hud(&self) -> Option<&Hud> {
        self.hud.as_ref()
    }
}

impl Default for ArenaScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<ViewState> for ArenaScreen {
    fn on_enter(&mut self, context: &mut GlobalContext) {
        self.mounted_at = context.time.elapsed();
        self.hud = Some(Hud::multiplayer(&mut context.timers));
        context.input_context = ARENA;
        debug!(target: "scene", "Arena controls: {}", control_legend());
    }

    fn on_exit(&mut self, _context: &mut GlobalContext) {
        self.hud = None;
    }

    fn update(&mut self, context: &mut GlobalContext) {
        if tick_actions(context).contains(&GameAction::Back)
            && navigate(context, ViewState::Arena, ViewEvent::Back)
        {
            return;
        }

        let t = context.time.elapsed().saturating_sub(self.mounted_at).as_secs_f32();
        let frame = self.composer.compose(t);
        trace!(target: "scene", "Arena frame t={:.2}s ({} entities)", frame.elapsed, frame.entities.len());

        let status = match self.hud.as_mut() {
            Some(hud) => {
                hud.update(&mut context.timers);
                hud.status_line()
            }
            None => String::new(),
        };
        context.present(format!("{} | {}", frame.title.text, status));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
