//! The player character: experience, levels and the backpack

use super::Character;
use crate::consts::{
    ATTACK_GROWTH, BACKPACK_SLOTS, FIRST_LEVEL_THRESHOLD, THRESHOLD_GROWTH, VITALS_GROWTH,
};
use crate::dungeon::{Cell, Position};
use crate::object::Backpack;
use crate::world::{EntityId, GameError, Messages};

/// Player state
#[derive(Debug, Clone)]
pub struct Player {
    pub base: Character,

    /// Experience level, starts at 1
    pub level: u32,

    /// Experience towards the next level
    pub exp: f64,

    /// Experience needed for the next level
    pub min_exp: f64,

    pub backpack: Backpack,
}

impl Player {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        hp: i32,
        mp: i32,
        min_attack: i32,
        max_attack: i32,
        pos: Position,
    ) -> Self {
        Self {
            base: Character::new(id, name, hp, mp, min_attack, max_attack, pos, Cell::Player),
            level: 1,
            exp: 0.0,
            min_exp: FIRST_LEVEL_THRESHOLD,
            backpack: Backpack::new(BACKPACK_SLOTS),
        }
    }

    /// Level up once if experience reached the threshold
    ///
    /// Returns true if a level was gained. Surplus experience carries over,
    /// but only one level is gained per check.
    pub fn check_levelup(&mut self, log: &mut Messages) -> bool {
        if self.exp < self.min_exp {
            return false;
        }
        self.level_up();
        log.push(format!("{} is now level {}!", self.base.name, self.level));
        tracing::info!(player = %self.base.id, level = self.level, "level up");
        true
    }

    fn level_up(&mut self) {
        let c = &mut self.base;
        self.level += 1;
        self.exp -= self.min_exp;
        self.min_exp += self.min_exp * THRESHOLD_GROWTH;
        c.hp_max += grow(c.hp_max, VITALS_GROWTH);
        c.mp_max += grow(c.mp_max, VITALS_GROWTH);
        c.hp = c.hp_max;
        c.mp = c.mp_max;
        c.min_attack += grow(c.min_attack, ATTACK_GROWTH);
        c.max_attack += grow(c.max_attack, ATTACK_GROWTH);
    }

    /// Use one unit of a backpack item on the player
    pub fn use_item(&mut self, name: &str, log: &mut Messages) -> Result<(), GameError> {
        self.backpack.use_item(name, &mut self.base, log)
    }
}

/// Truncated `value * rate`
fn grow(value: i32, rate: f64) -> i32 {
    (value as f64 * rate) as i32
}
