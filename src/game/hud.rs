//=========================================================================
// HUD Overlay
//=========================================================================
//
// Simulated player stats drawn over an arena. The HUD never reads the 3D
// scene; its only inputs are a one-second repeating timer and, in
// single-player, a score source.
//
// Lifetime:
//   Hud::multiplayer / single_player → starts the timer, owns its handle
//   Hud::update(&mut timers)         → applies every fire since last call
//   drop(Hud)                        → handle dropped, timer cancelled
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::time::{TimerHandle, Timers};

//=== Constants ===========================================================

pub const TICK_PERIOD: Duration = Duration::from_secs(1);
pub const MULTIPLAYER_ROUND_SECS: u32 = 180;
pub const SINGLE_PLAYER_ROUND_SECS: u32 = 300;
pub const BOT_COUNT: u32 = 3;

//=== Stat ================================================================

/// A bounded stat such as health or fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub current: u32,
    pub max: u32,
}

impl Stat {
    pub const fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    /// Fill level in `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.current.min(self.max) as f32 / self.max as f32
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

//=== Score Sources =======================================================

/// Supplies the per-second score bonus in single-player.
pub trait ScoreSource: Send {
    /// Next increment, in `0..=9`.
    fn next_increment(&mut self) -> u32;
}

/// Uniform increments from a seedable generator.
pub struct RandomScore<R = StdRng> {
    rng: R,
}

impl RandomScore<StdRng> {
    pub fn from_os() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng + Send> ScoreSource for RandomScore<R> {
    fn next_increment(&mut self) -> u32 {
        self.rng.random_range(0..=9)
    }
}

//=== Mode-specific State =================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplayerStats {
    pub alive: u32,
    pub lobby_size: u32,
    pub rank: u32,
    pub power_ups: [&'static str; 2],
}

pub struct SinglePlayerStats {
    pub score: u64,
    pub bots_defeated: u32,
    pub bot_count: u32,
    pub badges: [&'static str; 2],
    source: Box<dyn ScoreSource>,
}

impl fmt::Debug for SinglePlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglePlayerStats")
            .field("score", &self.score)
            .field("bots_defeated", &self.bots_defeated)
            .field("bot_count", &self.bot_count)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum HudMode {
    Multiplayer(MultiplayerStats),
    SinglePlayer(SinglePlayerStats),
}

//=== Hud =================================================================

#[derive(Debug)]
pub struct Hud {
    pub health: Stat,
    pub fuel: Stat,
    pub ammo: Option<Stat>,
    remaining_secs: u32,
    mode: HudMode,
    timer: TimerHandle,
}

impl Hud {
    /// Multiplayer HUD: 3:00 on the clock, 6 of 8 pilots alive.
    pub fn multiplayer(timers: &mut Timers) -> Self {
        let hud = Self {
            health: Stat::new(100, 100),
            fuel: Stat::new(75, 100),
            ammo: Some(Stat::new(30, 100)),
            remaining_secs: MULTIPLAYER_ROUND_SECS,
            mode: HudMode::Multiplayer(MultiplayerStats {
                alive: 6,
                lobby_size: 8,
                rank: 3,
                power_ups: ["Shield", "Speed"],
            }),
            timer: timers.start_repeating(TICK_PERIOD),
        };
        debug!(target: "hud", "Multiplayer HUD mounted (timer {:?})", hud.timer.id());
        hud
    }

    /// Training HUD: 5:00 on the clock, score rising every second.
    pub fn single_player(timers: &mut Timers, source: Box<dyn ScoreSource>) -> Self {
        let hud = Self {
            health: Stat::new(100, 100),
            fuel: Stat::new(75, 100),
            ammo: None,
            remaining_secs: SINGLE_PLAYER_ROUND_SECS,
            mode: HudMode::SinglePlayer(SinglePlayerStats {
                score: 0,
                bots_defeated: 0,
                bot_count: BOT_COUNT,
                badges: ["AI: Normal", "Training Mode"],
                source,
            }),
            timer: timers.start_repeating(TICK_PERIOD),
        };
        debug!(target: "hud", "Single-player HUD mounted (timer {:?})", hud.timer.id());
        hud
    }

    //--- Updates ----------------------------------------------------------

    /// Applies every timer fire since the last call. Returns the count.
    pub fn update(&mut self, timers: &mut Timers) -> u32 {
        let fired = timers.take_fired(&self.timer);
        for _ in 0..fired {
            self.tick();
        }
        fired
    }

    /// One elapsed second.
    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if let HudMode::SinglePlayer(stats) = &mut self.mode {
            stats.score += u64::from(stats.source.next_increment());
        }
        trace!(target: "hud", "HUD tick ({} left)", format_time(self.remaining_secs));
    }

    //--- Accessors --------------------------------------------------------

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn mode(&self) -> &HudMode {
        &self.mode
    }

    pub fn score(&self) -> Option<u64> {
        match &self.mode {
            HudMode::SinglePlayer(stats) => Some(stats.score),
            HudMode::Multiplayer(_) => None,
        }
    }

    /// One-line summary, e.g. `3:00 | HP 100/100 | Fuel 75/100 | Ammo 30/100 | 6/8 Alive | Rank #3`.
    pub fn status_line(&self) -> String {
        let mut parts = vec![
            format_time(self.remaining_secs),
            format!("HP {}", self.health),
            format!("Fuel {}", self.fuel),
        ];
        if let Some(ammo) = self.ammo {
            parts.push(format!("Ammo {}", ammo));
        }
        match &self.mode {
            HudMode::Multiplayer(stats) => {
                parts.push(format!("{}/{} Alive", stats.alive, stats.lobby_size));
                parts.push(format!("Rank #{}", stats.rank));
            }
            HudMode::SinglePlayer(stats) => {
                parts.push(format!("Score: {}", group_thousands(stats.score)));
                parts.push(format!("{}/{} Bots Defeated", stats.bots_defeated, stats.bot_count));
            }
        }
        parts.join(" | ")
    }
}

//=== Formatting ==========================================================

/// `m:ss`, e.g. 180 → `3:00`, 65 → `1:05`.
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `12345` → `12,345`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

//=========================================================================
// Unit Tests
//=========================================================================
