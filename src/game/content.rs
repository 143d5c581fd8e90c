//=========================================================================
// Static Content
//=========================================================================
//
// Read-only seed data shown by the screens: battle modes, leaderboard,
// lobby roster, pilot profile, arena card and control legend.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Game Modes ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        })
    }
}

/// A battle mode card on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMode {
    /// Selection identifier, e.g. `battle-royale`.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub player_count: &'static str,
    pub difficulty: Difficulty,
    pub popular: bool,
}

pub const GAME_MODES: [GameMode; 4] = [
    GameMode {
        id: "battle-royale",
        name: "Battle Royale",
        description: "Last pilot flying wins the ultimate sky battle",
        player_count: "8-16 Players",
        difficulty: Difficulty::Hard,
        popular: true,
    },
    GameMode {
        id: "team-deathmatch",
        name: "Team Deathmatch",
        description: "Squadron vs squadron aerial combat",
        player_count: "4v4 Players",
        difficulty: Difficulty::Medium,
        popular: true,
    },
    GameMode {
        id: "free-for-all",
        name: "Free For All",
        description: "Every pilot for themselves in chaotic combat",
        player_count: "6-8 Players",
        difficulty: Difficulty::Medium,
        popular: false,
    },
    GameMode {
        id: "capture-orb",
        name: "Capture the Orb",
        description: "Secure and defend the cosmic energy orb",
        player_count: "3v3 Players",
        difficulty: Difficulty::Easy,
        popular: false,
    },
];

/// Mode highlighted when the menu opens.
pub const DEFAULT_MODE: &str = "battle-royale";

//=== Leaderboard =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub score: u32,
}

pub const LEADERBOARD: [LeaderboardEntry; 5] = [
    LeaderboardEntry { rank: 1, name: "AerialAce", score: 2847 },
    LeaderboardEntry { rank: 2, name: "SkyHunter", score: 2691 },
    LeaderboardEntry { rank: 3, name: "JetMaster", score: 2534 },
    LeaderboardEntry { rank: 4, name: "CloudRider", score: 2387 },
    LeaderboardEntry { rank: 5, name: "StormPilot", score: 2298 },
];

pub const PLAYERS_ONLINE: u32 = 2847;

//=== Pilot Profile =======================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PilotProfile {
    pub callsign: &'static str,
    pub level: u32,
    pub title: &'static str,
    pub wins: u32,
    pub kill_death_ratio: f32,
    pub flight_hours: u32,
    pub global_rank: u32,
}

pub const PILOT_PROFILE: PilotProfile = PilotProfile {
    callsign: "SkyCommander",
    level: 12,
    title: "Ace Pilot",
    wins: 247,
    kill_death_ratio: 1.8,
    flight_hours: 89,
    global_rank: 15,
};

//=== Lobby ===============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub ready: bool,
    pub host: bool,
}

pub const ROOM_CODE: &str = "SKY-2024";
pub const ROOM_CAPACITY: usize = 8;

/// Roster a freshly created room starts with.
pub fn lobby_roster() -> Vec<Player> {
    [
        (1, "SkyCommander", true, true),
        (2, "JetPilot_42", false, false),
        (3, "AerialAce", true, false),
    ]
    .into_iter()
    .map(|(id, name, ready, host)| Player { id, name: name.to_string(), ready, host })
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaInfo {
    pub map: &'static str,
    pub size: &'static str,
    pub gravity: &'static str,
}

pub const ARENA_INFO: ArenaInfo = ArenaInfo {
    map: "Cloud City",
    size: "Medium",
    gravity: "Low",
};

//=== Controls ============================================================

/// Legend entry shown in the arenas. Labels only; nothing is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlHint {
    pub key: &'static str,
    pub action: &'static str,
}

pub const CONTROL_HINTS: [ControlHint; 4] = [
    ControlHint { key: "WASD", action: "Move" },
    ControlHint { key: "SPACE", action: "Jetpack" },
    ControlHint { key: "SHIFT", action: "Boost" },
    ControlHint { key: "CLICK", action: "Shoot" },
];

/// `WASD Move, SPACE Jetpack, ...`
pub fn control_legend() -> String {
    CONTROL_HINTS
        .iter()
        .map(|hint| format!("{} {}", hint.key, hint.action))
        .collect::<Vec<_>>()
        .join(", ")
}

//=========================================================================
// Unit Tests
//=========================================================================
