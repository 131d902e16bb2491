//! Mobs: species presets, chasing, detection and loot

use strum::{Display, EnumIter};

use super::{Character, Player};
use crate::action::{Direction, MoveResult};
use crate::consts::CHASE_RADIUS_SQ;
use crate::dungeon::{Cell, Position, TileGrid};
use crate::object::{ItemCatalog, ItemKind};
use crate::rng::GameRng;
use crate::world::{DropRule, EntityId, Messages};

/// Order in which chase steps are tried; the first strict improvement
/// wins ties.
const CHASE_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Down,
    Direction::Up,
];

/// Mob species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Species {
    #[strum(to_string = "Mob")]
    Generic,
    Bison,
    Goblin,
}

/// Starting stats of a freshly spawned mob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobPreset {
    pub hp: i32,
    pub mp: i32,
    pub min_attack: i32,
    pub max_attack: i32,
}

impl Species {
    pub const fn marker(self) -> Cell {
        match self {
            Species::Generic => Cell::GenericMob,
            Species::Bison => Cell::Bison,
            Species::Goblin => Cell::Goblin,
        }
    }

    pub const fn from_marker(cell: Cell) -> Option<Self> {
        match cell {
            Cell::GenericMob => Some(Species::Generic),
            Cell::Bison => Some(Species::Bison),
            Cell::Goblin => Some(Species::Goblin),
            _ => None,
        }
    }

    pub const fn preset(self) -> MobPreset {
        match self {
            Species::Generic => MobPreset {
                hp: 50,
                mp: 0,
                min_attack: 1,
                max_attack: 5,
            },
            Species::Bison => MobPreset {
                hp: 50,
                mp: 0,
                min_attack: 0,
                max_attack: 5,
            },
            Species::Goblin => MobPreset {
                hp: 75,
                mp: 10,
                min_attack: 1,
                max_attack: 25,
            },
        }
    }

    /// Experience multiplier awarded for a kill
    pub const fn exp_factor(self) -> f64 {
        match self {
            Species::Generic => 1.0,
            Species::Bison => 1.3,
            Species::Goblin => 1.7,
        }
    }

    /// (item, rate) pairs rolled on death
    pub const fn drop_table(self) -> &'static [(ItemKind, f64)] {
        match self {
            Species::Generic => &[],
            Species::Bison => &[(ItemKind::HpPotion, 0.5), (ItemKind::MpPotion, 0.5)],
            Species::Goblin => &[(ItemKind::HpPotion, 0.7), (ItemKind::MpPotion, 0.7)],
        }
    }
}

/// A hostile mob on a map
#[derive(Debug, Clone)]
pub struct Mob {
    pub base: Character,
    pub species: Species,
}

impl Mob {
    pub fn new(id: EntityId, species: Species, pos: Position) -> Self {
        let p = species.preset();
        Self {
            base: Character::new(
                id,
                species.to_string(),
                p.hp,
                p.mp,
                p.min_attack,
                p.max_attack,
                pos,
                species.marker(),
            ),
            species,
        }
    }

    /// True if the player marker is in the 3x3 block around the mob
    pub fn detect_player(&self, grid: &TileGrid) -> bool {
        grid.surroundings(self.base.pos).contains(&Cell::Player)
    }

    /// The step that brings the mob strictly closer to `target`
    ///
    /// `None` when the target is out of chase range or on the mob's cell.
    pub fn choose_step(&self, target: Position) -> Option<Direction> {
        let here = self.base.pos;
        let mut best = here.distance_sq(target);
        if best == 0 || best >= CHASE_RADIUS_SQ {
            return None;
        }
        let mut choice = None;
        for dir in CHASE_ORDER {
            let (dx, dy) = dir.delta();
            let d = here.offset(dx, dy).distance_sq(target);
            if d < best {
                best = d;
                choice = Some(dir);
            }
        }
        choice
    }

    /// Take one chase step towards `target`, respecting occupancy
    pub fn auto_move(&mut self, target: Position, grid: &mut TileGrid) -> Option<MoveResult> {
        let dir = self.choose_step(target)?;
        Some(self.base.step(dir, grid))
    }

    /// Roll the species drop table and put what drops in the killer's backpack
    pub fn drop_loot(
        &self,
        killer: &mut Player,
        catalog: &ItemCatalog,
        rule: DropRule,
        rng: &mut GameRng,
        log: &mut Messages,
    ) -> Vec<ItemKind> {
        let mut dropped = Vec::new();
        for &(kind, rate) in self.species.drop_table() {
            let roll = rng.frac();
            if !rule.grants(roll, rate) {
                continue;
            }
            let item = catalog.get(kind);
            match killer.backpack.add(item, 1) {
                Ok(_) => {
                    log.push(format!("{} dropped {}", self.base.name, item.name));
                    dropped.push(kind);
                }
                Err(e) => log.push(e.to_string()),
            }
        }
        dropped
    }
}
