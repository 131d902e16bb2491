//! Shared actor record: vitals, combat range, position and skills

use crate::action::{Direction, MoveResult};
use crate::dungeon::{Cell, Position, TileGrid};
use crate::magic::Skill;
use crate::rng::GameRng;
use crate::world::{EntityId, GameError, Messages};

/// Any actor with health, mana, a position and combat stats
///
/// `hp` may go below zero after an attack. Only [`Character::check_dead`]
/// clamps it and marks the character dead.
#[derive(Debug, Clone)]
pub struct Character {
    pub id: EntityId,
    pub name: String,

    pub hp: i32,
    pub hp_max: i32,
    pub mp: i32,
    pub mp_max: i32,

    /// Damage roll range, inclusive
    pub min_attack: i32,
    pub max_attack: i32,

    pub pos: Position,

    /// Code written into the grid where this character stands
    pub marker: Cell,

    pub dead: bool,

    /// Known skills, in learning order
    pub skills: Vec<Skill>,
}

impl Character {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        hp: i32,
        mp: i32,
        min_attack: i32,
        max_attack: i32,
        pos: Position,
        marker: Cell,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            hp,
            hp_max: hp,
            mp,
            mp_max: mp,
            min_attack,
            max_attack,
            pos,
            marker,
            dead: false,
            skills: Vec::new(),
        }
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn learn(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Hit `target` for `dmg`, or for a roll in the attack range
    ///
    /// Fails without effect if either side is already at or below zero
    /// health. Returns the damage dealt.
    pub fn attack(
        &self,
        target: &mut Character,
        dmg: Option<i32>,
        rng: &mut GameRng,
        log: &mut Messages,
    ) -> Result<i32, GameError> {
        let dmg = dmg.unwrap_or_else(|| rng.range(self.min_attack, self.max_attack));
        if self.hp <= 0 {
            log.push(format!("{} is dead!", self.name));
            return Err(GameError::EntityAlreadyDead {
                name: self.name.clone(),
            });
        }
        if target.hp <= 0 {
            log.push(format!(
                "{} is already dead, {} is the winner!",
                target.name, self.name
            ));
            return Err(GameError::EntityAlreadyDead {
                name: target.name.clone(),
            });
        }
        target.hp -= dmg;
        log.push(format!(
            "{} attacks {}! {} loses {} health points!",
            self.name, target.name, target.name, dmg
        ));
        Ok(dmg)
    }

    /// Process death: clamp health to zero and set the dead flag
    ///
    /// Returns true if the character is dead after the check.
    pub fn check_dead(&mut self) -> bool {
        if self.hp <= 0 {
            self.hp = 0;
            self.dead = true;
        }
        self.dead
    }

    /// Restore full health
    pub fn heal(&mut self, log: &mut Messages) -> Result<(), GameError> {
        if self.dead {
            log.push(format!("{} is dead, cannot restore health", self.name));
            return Err(GameError::EntityAlreadyDead {
                name: self.name.clone(),
            });
        }
        self.hp = self.hp_max;
        Ok(())
    }

    /// Clear the dead flag; health is left as is
    pub fn revive(&mut self) {
        self.dead = false;
    }

    /// Step one cell, if the target cell is free
    pub fn step(&mut self, dir: Direction, grid: &mut TileGrid) -> MoveResult {
        let (dx, dy) = dir.delta();
        let target = self.pos.offset(dx, dy);
        match grid.is_occupied(target) {
            Ok(false) => {}
            Ok(true) => return MoveResult::Blocked,
            Err(e) => {
                tracing::warn!(entity = %self.id, "{}", e);
                return MoveResult::Blocked;
            }
        }
        if let Err(e) = grid.unplot(self.pos) {
            tracing::warn!(entity = %self.id, "{}", e);
        }
        // The target was checked free above
        if let Err(e) = grid.plot(target, self.marker) {
            tracing::warn!(entity = %self.id, "{}", e);
        }
        self.pos = target;
        MoveResult::Moved
    }

    /// Cast the first known skill named `name`
    ///
    /// `receiver` of `None` means a self-cast. Unknown names do nothing and
    /// return `Ok(false)`.
    pub fn skill(
        &mut self,
        name: &str,
        receiver: Option<&mut Character>,
        mana_check: bool,
        log: &mut Messages,
    ) -> Result<bool, GameError> {
        let Some(skill) = self.skills.iter().find(|s| s.name == name).cloned() else {
            tracing::debug!(entity = %self.id, skill = name, "unknown skill");
            return Ok(false);
        };
        skill.cast(self, receiver, mana_check, log)?;
        Ok(true)
    }
}
