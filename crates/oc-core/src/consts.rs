//! Core game constants

/// Main map dimensions
pub const MAIN_WIDTH: usize = 32;
pub const MAIN_HEIGHT: usize = 16;

/// Number of mobs spawned on the main map
pub const MAIN_SPAWN_SPOTS: usize = 3;

/// Backpack slots carried by the player
pub const BACKPACK_SLOTS: usize = 12;

/// Starting player stats
pub const PLAYER_NAME: &str = "Adrian";
pub const PLAYER_HP: i32 = 500;
pub const PLAYER_MP: i32 = 500;
pub const PLAYER_MIN_ATTACK: i32 = 10;
pub const PLAYER_MAX_ATTACK: i32 = 15;
pub const PLAYER_START: (i32, i32) = (5, 5);

/// Experience needed for the first level-up
pub const FIRST_LEVEL_THRESHOLD: f64 = 10.0;

/// Level-up growth rates
pub const THRESHOLD_GROWTH: f64 = 0.35;
pub const VITALS_GROWTH: f64 = 0.1;
pub const ATTACK_GROWTH: f64 = 0.15;

/// Squared Euclidean distance under which mobs chase the player (sqrt(50) tiles)
pub const CHASE_RADIUS_SQ: i32 = 50;

/// Battle pacing between rounds, in milliseconds
pub const DEFAULT_BATTLE_PACE_MS: u64 = 3000;

/// Random probes per grid cell before spawning gives up
pub const SPAWN_PROBES_PER_CELL: usize = 8;

/// Amounts restored by the small potions / Heal I
pub const SMALL_HEAL: i32 = 20;
pub const SMALL_MANA: i32 = 10;
