//! Level: a named map owning its grid and its active mobs

use super::{Cell, Position, TileGrid};
use crate::action::MoveResult;
use crate::consts::{MAIN_HEIGHT, MAIN_WIDTH, SPAWN_PROBES_PER_CELL};
use crate::entity::{Combatant, Mob, Species};
use crate::rng::GameRng;
use crate::world::{EntityId, GameError, MapId, Registry};

/// The main map template: an Empty border around a Floor interior
pub fn main_template() -> Vec<Vec<Cell>> {
    (0..MAIN_HEIGHT)
        .map(|y| {
            (0..MAIN_WIDTH)
                .map(|x| {
                    let border = x == 0 || y == 0 || x == MAIN_WIDTH - 1 || y == MAIN_HEIGHT - 1;
                    if border { Cell::Empty } else { Cell::Floor }
                })
                .collect()
        })
        .collect()
}

/// A map instance
#[derive(Debug, Clone)]
pub struct Level {
    pub id: MapId,
    pub name: String,

    /// Private copy of the template this level was built from
    pub grid: TileGrid,

    /// Active mobs, in spawn order
    pub mobs: Vec<Mob>,

    /// How many mobs the spawn pass places
    pub spawn_spots: usize,

    /// Species the spawn pass picks from
    pub spawnable: Vec<Species>,

    spawned: bool,
}

impl Level {
    pub fn new(
        id: MapId,
        name: impl Into<String>,
        template: &[Vec<Cell>],
        spawn_spots: usize,
        spawnable: Vec<Species>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            grid: TileGrid::from_template(template),
            mobs: Vec::new(),
            spawn_spots,
            spawnable,
            spawned: false,
        }
    }

    /// The "Main" map with Bison and Goblin spawns
    pub fn main(registry: &mut Registry, spawn_spots: usize) -> Self {
        Self::new(
            registry.map(),
            "Main",
            &main_template(),
            spawn_spots,
            vec![Species::Bison, Species::Goblin],
        )
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// True once the spawn pass has run
    pub fn is_spawned(&self) -> bool {
        self.spawned
    }

    /// Place a new mob of `species` at `pos`
    ///
    /// Returns `Ok(None)` if the cell is occupied.
    pub fn spawn_mob(
        &mut self,
        registry: &mut Registry,
        species: Species,
        pos: Position,
    ) -> Result<Option<EntityId>, GameError> {
        if !self.grid.plot(pos, species.marker())? {
            return Ok(None);
        }
        let mob = Mob::new(registry.entity(), species, pos);
        let id = mob.base.id;
        tracing::debug!(map = %self.name, mob = %id, %species, %pos, "spawned mob");
        self.mobs.push(mob);
        Ok(Some(id))
    }

    /// Run the one-time spawn pass
    ///
    /// Each spot probes random cells until a free one is found. Probing a
    /// spot gives up after `SPAWN_PROBES_PER_CELL` probes per grid cell.
    /// Later calls do nothing and return `Ok(0)`.
    pub fn spawn_set(
        &mut self,
        registry: &mut Registry,
        rng: &mut GameRng,
    ) -> Result<usize, GameError> {
        if self.spawned {
            return Ok(0);
        }
        self.spawned = true;

        let max_probes = SPAWN_PROBES_PER_CELL * self.width() * self.height();
        let mut placed = 0;
        for _ in 0..self.spawn_spots {
            let mut probes = 0;
            loop {
                if probes >= max_probes {
                    tracing::warn!(map = %self.name, probes, "no free cell to spawn on");
                    return Err(GameError::NoFreeCell {
                        map: self.name.clone(),
                        attempts: probes,
                    });
                }
                probes += 1;
                let pos = Position::from(rng.random_coord(self.width(), self.height()));
                if self.grid.is_occupied(pos)? {
                    continue;
                }
                let Some(&species) = rng.choose(&self.spawnable) else {
                    return Ok(placed);
                };
                if self.spawn_mob(registry, species, pos)?.is_some() {
                    placed += 1;
                }
                break;
            }
        }
        Ok(placed)
    }

    pub fn mob(&self, id: EntityId) -> Option<&Mob> {
        self.mobs.iter().find(|m| m.base.id == id)
    }

    pub fn mob_mut(&mut self, id: EntityId) -> Option<&mut Mob> {
        self.mobs.iter_mut().find(|m| m.base.id == id)
    }

    pub fn mob_index(&self, id: EntityId) -> Option<usize> {
        self.mobs.iter().position(|m| m.base.id == id)
    }

    /// Ids of the active mobs, in spawn order
    pub fn mob_ids(&self) -> Vec<EntityId> {
        self.mobs.iter().map(|m| m.base.id).collect()
    }

    /// Step a mob towards `target`
    ///
    /// `None` if the mob is gone or has no step to take.
    pub fn chase(&mut self, id: EntityId, target: Position) -> Option<MoveResult> {
        let idx = self.mob_index(id)?;
        self.mobs[idx].auto_move(target, &mut self.grid)
    }

    /// Run the death check on a mob, removing it if dead
    ///
    /// This is the only way a mob leaves the level. Returns true if the mob
    /// was removed.
    pub fn check_mob_dead(&mut self, id: EntityId) -> bool {
        let Some(idx) = self.mob_index(id) else {
            return false;
        };
        if !self.mobs[idx].check_dead(&mut self.grid) {
            return false;
        }
        let mob = self.mobs.remove(idx);
        tracing::debug!(map = %self.name, mob = %mob.base.id, "mob died");
        true
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_level(w: usize, h: usize, spots: usize) -> Level {
        let template = vec![vec![Cell::Floor; w]; h];
        Level::new(MapId(0), "Test", &template, spots, vec![Species::Bison, Species::Goblin])
    }

    #[test]
    fn test_main_template() {
        let t = main_template();
        assert_eq!(t.len(), 16);
        assert!(t.iter().all(|row| row.len() == 32));
        assert_eq!(t[0][5], Cell::Empty);
        assert_eq!(t[15][5], Cell::Empty);
        assert_eq!(t[5][0], Cell::Empty);
        assert_eq!(t[5][31], Cell::Empty);
        assert_eq!(t[5][5], Cell::Floor);
    }

    #[test]
    fn test_level_owns_template_copy() {
        let template = main_template();
        let mut registry = Registry::new();
        let mut level = Level::new(registry.map(), "Main", &template, 0, Vec::new());
        level.grid.plot(Position::new(3, 3), Cell::Player).unwrap();
        assert_eq!(template[3][3], Cell::Floor);

        let other = Level::new(registry.map(), "Main", &template, 0, Vec::new());
        assert_eq!(other.grid.cell(Position::new(3, 3)), Ok(Cell::Floor));
        assert_ne!(level.id, other.id);
    }

    #[test]
    fn test_spawn_set_places_mobs_once() {
        let mut registry = Registry::new();
        let mut rng = GameRng::new(42);
        let mut level = Level::main(&mut registry, 3);

        assert_eq!(level.spawn_set(&mut registry, &mut rng), Ok(3));
        assert_eq!(level.mobs.len(), 3);
        assert!(level.is_spawned());
        for mob in &level.mobs {
            assert!(matches!(mob.species, Species::Bison | Species::Goblin));
            assert_eq!(level.grid.cell(mob.base.pos), Ok(mob.base.marker));
        }

        assert_eq!(level.spawn_set(&mut registry, &mut rng), Ok(0));
        assert_eq!(level.mobs.len(), 3);
    }

    #[test]
    fn test_spawn_never_lands_on_walls() {
        for seed in 0..30 {
            let mut registry = Registry::new();
            let mut rng = GameRng::new(seed);
            let mut level = Level::main(&mut registry, 10);
            level.spawn_set(&mut registry, &mut rng).unwrap();
            for mob in &level.mobs {
                let p = mob.base.pos;
                assert!(p.x > 0 && p.y > 0 && p.x < 31 && p.y < 15, "seed {seed}: {p}");
            }
        }
    }

    #[test]
    fn test_spawn_fails_when_full() {
        let mut registry = Registry::new();
        let mut rng = GameRng::new(42);
        let mut level = open_level(2, 2, 5);
        assert_eq!(
            level.spawn_set(&mut registry, &mut rng),
            Err(GameError::NoFreeCell {
                map: "Test".into(),
                attempts: 32
            })
        );
        assert_eq!(level.mobs.len(), 4);
    }

    #[test]
    fn test_spawn_mob_on_occupied_cell() {
        let mut registry = Registry::new();
        let mut level = open_level(3, 3, 0);
        let pos = Position::new(1, 1);
        assert!(level.spawn_mob(&mut registry, Species::Bison, pos).unwrap().is_some());
        assert_eq!(level.spawn_mob(&mut registry, Species::Goblin, pos), Ok(None));
        assert_eq!(level.mobs.len(), 1);
        assert!(level.spawn_mob(&mut registry, Species::Goblin, Position::new(9, 9)).is_err());
    }

    #[test]
    fn test_check_mob_dead_removes_one() {
        let mut registry = Registry::new();
        let mut level = open_level(5, 5, 0);
        let a = level
            .spawn_mob(&mut registry, Species::Bison, Position::new(1, 1))
            .unwrap()
            .unwrap();
        let b = level
            .spawn_mob(&mut registry, Species::Bison, Position::new(3, 3))
            .unwrap()
            .unwrap();

        assert!(!level.check_mob_dead(a));
        assert_eq!(level.mobs.len(), 2);

        level.mob_mut(a).unwrap().base.hp = -4;
        assert!(level.check_mob_dead(a));
        assert_eq!(level.mob_ids(), vec![b]);
        assert_eq!(level.grid.cell(Position::new(1, 1)), Ok(Cell::Floor));
        assert_eq!(level.grid.cell(Position::new(3, 3)), Ok(Cell::Bison));

        assert!(!level.check_mob_dead(a));
        assert!(level.mob(a).is_none());
    }

    #[test]
    fn test_chase_moves_registered_mob() {
        let mut registry = Registry::new();
        let mut level = open_level(10, 10, 0);
        let id = level
            .spawn_mob(&mut registry, Species::Goblin, Position::new(5, 5))
            .unwrap()
            .unwrap();
        assert_eq!(level.chase(id, Position::new(5, 2)), Some(MoveResult::Moved));
        assert_eq!(level.mob(id).unwrap().base.pos, Position::new(5, 4));
        assert_eq!(level.grid.cell(Position::new(5, 4)), Ok(Cell::Goblin));
        assert_eq!(level.chase(EntityId(99), Position::new(5, 2)), None);
    }

    #[test]
    fn test_render() {
        let mut registry = Registry::new();
        let mut level = Level::new(
            MapId(0),
            "Tiny",
            &[
                vec![Cell::Empty, Cell::Empty, Cell::Empty],
                vec![Cell::Empty, Cell::Floor, Cell::Floor],
            ],
            0,
            Vec::new(),
        );
        level
            .spawn_mob(&mut registry, Species::Goblin, Position::new(2, 1))
            .unwrap();
        assert_eq!(level.render(), "###\n# G\n");
    }
}
