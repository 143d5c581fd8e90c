//=========================================================================
// Single-Player Arena Screen
//=========================================================================
//
// Training arena against three bots. Same lifetime rules as the
// multiplayer arena; the HUD additionally accrues a random score every
// second from a pluggable source.
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
use crate::game::hud::{Hud, HudMode, RandomScore, ScoreSource};
use crate::game::view::{ViewEvent, ViewState};

use super::{navigate, tick_actions};

//=== SinglePlayerArenaScreen =============================================

/// Builds a fresh score source for each visit.
pub type ScoreSourceFactory = fn() -> Box<dyn ScoreSource>;

fn os_seeded_score() -> Box<dyn ScoreSource> {
    Box::new(RandomScore::from_os())
}

pub struct SinglePlayerArenaScreen {
    composer: SceneComposer,
    hud: Option<Hud>,
    mounted_at: Duration,
    score_source: ScoreSourceFactory,
}

impl SinglePlayerArenaScreen {
    pub fn new() -> Self {
        Self::with_score_source(os_seeded_score)
    }

    pub fn with_score_source(score_source: ScoreSourceFactory) -> Self {
        Self {
            composer: SceneComposer::single_player(),
            hud: None,
            mounted_at: Duration::ZERO,
            score_source,
        }
    }

    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    pub fn hud(&self) -> Option<&Hud> {
        self.hud.as_ref()
    }
}

impl Default for SinglePlayerArenaScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<ViewState> for SinglePlayerArenaScreen {
    fn on_enter(&mut self, context: &mut GlobalContext) {
        self.mounted_at = context.time.elapsed();
        self.hud = Some(Hud::single_player(&mut context.timers, (self.score_source)()));
        context.input_context = ARENA;
        debug!(target: "scene", "Training arena controls: {}", control_legend());
    }

    fn on_exit(&mut self, _context: &mut GlobalContext) {
        if let Some(hud) = self.hud.take() {
            trace!(target: "hud", "Training ended with score {:?}", hud.score());
        }
    }

    fn update(&mut self, context: &mut GlobalContext) {
        if tick_actions(context).contains(&GameAction::Back)
            && navigate(context, ViewState::SinglePlayerArena, ViewEvent::Back)
        {
            return;
        }

        let t = context.time.elapsed().saturating_sub(self.mounted_at).as_secs_f32();
        let frame = self.composer.compose(t);
        trace!(
            target: "scene",
            "Training frame t={:.2}s ({} entities, {} bots)",
            frame.elapsed,
            frame.entities.len(),
            self.composer.bot_count()
        );

        let Some(hud) = self.hud.as_mut() else {
            context.present(frame.title.text);
            return;
        };
        hud.update(&mut context.timers);

        let badges = match hud.mode() {
            HudMode::SinglePlayer(stats) => stats.badges.join(", "),
            HudMode::Multiplayer(_) => String::new(),
        };
        context.present(format!("{} | {} | {}", frame.title.text, hud.status_line(), badges));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
