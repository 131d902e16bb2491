//! Main game loop

use std::io;

use crate::action::{Command, InputMode, MoveResult};
use crate::combat::{BattleOutcome, run_battle};
use crate::consts::{PLAYER_HP, PLAYER_MAX_ATTACK, PLAYER_MIN_ATTACK, PLAYER_MP, PLAYER_START};
use crate::dungeon::{Level, Position};
use crate::entity::{Combatant, Player};
use crate::frontend::Frontend;
use crate::magic::SkillBook;
use crate::object::ItemCatalog;
use crate::rng::GameRng;
use crate::world::{GameError, GameOptions, Messages, Registry};

/// Result of a game loop step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player died with message
    PlayerDied(String),
    /// Player quit
    PlayerQuit,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Player character
    pub player: Player,

    /// The map being played, with its mobs
    pub level: Level,

    /// Every item kind in the game
    pub items: ItemCatalog,

    /// Every skill in the game
    pub skills: SkillBook,

    /// Id counters
    pub registry: Registry,

    /// Random number generator
    pub rng: GameRng,

    /// Message log
    pub messages: Messages,

    pub options: GameOptions,

    /// Player commands executed
    pub turns: u64,
}

impl GameState {
    /// Build the world: catalogs, the main map, the player and the first
    /// spawn pass
    pub fn new(options: GameOptions) -> Result<Self, GameError> {
        let rng = options.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(options, rng)
    }

    pub fn with_rng(options: GameOptions, mut rng: GameRng) -> Result<Self, GameError> {
        let mut registry = Registry::new();
        let items = ItemCatalog::standard(&mut registry);
        let skills = SkillBook::standard(&mut registry);
        let mut level = Level::main(&mut registry, options.spawn_spots);

        let player = Player::new(
            registry.entity(),
            options.name.clone(),
            PLAYER_HP,
            PLAYER_MP,
            PLAYER_MIN_ATTACK,
            PLAYER_MAX_ATTACK,
            Position::from(PLAYER_START),
        );
        level.grid.plot(player.base.pos, player.base.marker)?;

        let mut messages = Messages::new();
        if let Err(e) = level.spawn_set(&mut registry, &mut rng) {
            messages.push(e.to_string());
        }
        tracing::info!(
            seed = rng.seed(),
            map = %level.name,
            mobs = level.mobs.len(),
            "world created"
        );

        Ok(Self {
            player,
            level,
            items,
            skills,
            registry,
            rng,
            messages,
            options,
            turns: 0,
        })
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg);
    }

    /// "HP: x # MP: y ## Lvl: n # XP: z.zz"
    pub fn status_line(&self) -> String {
        let p = &self.player;
        format!(
            "HP: {} # MP: {} ## Lvl: {} # XP: {:.2}",
            p.base.hp, p.base.mp, p.level, p.exp
        )
    }

    /// Status bar framed by '#' lines, then the map
    pub fn frame(&self) -> String {
        let status = format!("# {} #", self.status_line());
        let rule = "#".repeat(status.chars().count());
        format!("{rule}\n{status}\n{rule}\n{}", self.level.render())
    }

    /// Cast one of the player's skills on the player
    pub fn cast_on_self(&mut self, name: &str) -> Result<bool, GameError> {
        self.player
            .base
            .skill(name, None, self.options.mana_check, &mut self.messages)
    }
}

/// The game loop
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play until the player dies or quits
    pub fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> io::Result<GameLoopResult> {
        frontend.render(&self.state, InputMode::Explore)?;
        loop {
            if let Some(end) = self.mob_phase(frontend)? {
                return Ok(end);
            }
            let command = frontend.next_command(InputMode::Explore)?;
            let result = self.execute(command);
            if result != GameLoopResult::Continue {
                return Ok(result);
            }
            frontend.render(&self.state, InputMode::Explore)?;
        }
    }

    /// Let every mob look for the player, fight if found, then chase
    ///
    /// Mobs removed by a battle earlier in the pass are skipped.
    pub fn mob_phase<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> io::Result<Option<GameLoopResult>> {
        for id in self.state.level.mob_ids() {
            let Some(mob) = self.state.level.mob(id) else {
                continue;
            };
            let species = mob.species;
            if mob.detect_player(&self.state.level.grid) {
                match run_battle(&mut self.state, id, frontend)? {
                    Some(BattleOutcome::PlayerLost) => {
                        return Ok(Some(GameLoopResult::PlayerDied(format!(
                            "killed by a {species}"
                        ))));
                    }
                    Some(BattleOutcome::Abandoned) => return Ok(Some(GameLoopResult::PlayerQuit)),
                    Some(BattleOutcome::PlayerWon { .. }) | None => {}
                }
            }
            let target = self.state.player.base.pos;
            self.state.level.chase(id, target);
        }
        Ok(None)
    }

    /// Execute a player command
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        self.state.messages.clear();
        match command {
            Command::Move(dir) => {
                let GameState { player, level, .. } = &mut self.state;
                if player.base.step(dir, &mut level.grid) == MoveResult::Blocked {
                    tracing::debug!(%dir, pos = %player.base.pos, "move blocked");
                }
            }
            Command::Attack => {
                tracing::debug!("attack outside of battle");
            }
            Command::Inventory => {
                let summary = self.state.player.backpack.summary();
                self.state.message(summary);
            }
            Command::Use(kind) => {
                let GameState {
                    player, messages, ..
                } = &mut self.state;
                if let Err(e) = player.use_item(&kind.to_string(), messages) {
                    tracing::debug!(%e, "item not used");
                }
            }
            Command::Quit => return GameLoopResult::PlayerQuit,
        }
        self.state.turns += 1;

        if !self.state.player.is_alive() {
            return GameLoopResult::PlayerDied("died".to_string());
        }
        GameLoopResult::Continue
    }
}
