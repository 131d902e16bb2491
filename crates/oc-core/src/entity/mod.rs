//! Entity system
//!
//! Players and mobs share a [`Character`] record. Behaviour common to
//! both goes through the [`Combatant`] trait, and the [`EntityKind`] tag
//! tells them apart.

mod character;
mod mob;
mod player;

pub use character::Character;
pub use mob::{Mob, MobPreset, Species};
pub use player::Player;

use crate::dungeon::TileGrid;
use crate::rng::GameRng;
use crate::world::{GameError, Messages};

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Mob(Species),
}

/// Anything that can fight
pub trait Combatant {
    fn character(&self) -> &Character;
    fn character_mut(&mut self) -> &mut Character;
    fn kind(&self) -> EntityKind;

    /// Hook run once the entity has been found dead
    fn on_death(&mut self, grid: &mut TileGrid);

    fn name(&self) -> &str {
        &self.character().name
    }

    fn is_alive(&self) -> bool {
        self.character().is_alive()
    }

    fn attack(
        &self,
        target: &mut dyn Combatant,
        dmg: Option<i32>,
        rng: &mut GameRng,
        log: &mut Messages,
    ) -> Result<i32, GameError> {
        self.character()
            .attack(target.character_mut(), dmg, rng, log)
    }

    /// Clamp health and mark dead; runs [`Combatant::on_death`] on the
    /// first check that finds the entity dead
    fn check_dead(&mut self, grid: &mut TileGrid) -> bool {
        let was_dead = self.character().dead;
        let dead = self.character_mut().check_dead();
        if dead && !was_dead {
            self.on_death(grid);
        }
        dead
    }
}

impl Combatant for Player {
    fn character(&self) -> &Character {
        &self.base
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.base
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn on_death(&mut self, _grid: &mut TileGrid) {
        tracing::info!(player = %self.base.id, level = self.level, "player died");
    }
}

impl Combatant for Mob {
    fn character(&self) -> &Character {
        &self.base
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.base
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Mob(self.species)
    }

    fn on_death(&mut self, grid: &mut TileGrid) {
        if let Err(e) = grid.unplot(self.base.pos) {
            tracing::warn!(mob = %self.base.id, "{}", e);
        }
        tracing::debug!(mob = %self.base.id, species = %self.species, "mob removed from grid");
    }
}
