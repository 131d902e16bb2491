use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use oc_core::action::{Command, InputMode};
use oc_core::world::GameOptions;
use oc_core::{Frontend, GameState};

/// Plays back a fixed list of commands and records every frame
///
/// Once the script runs out it answers `Quit`, so a game loop driven by it
/// always terminates.
#[derive(Default)]
pub struct ScriptedFrontend {
    pub commands: VecDeque<Command>,
    pub frames: Vec<(InputMode, String)>,
    pub pauses: Vec<Duration>,
}

impl ScriptedFrontend {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn battle_frames(&self) -> usize {
        self.frames
            .iter()
            .filter(|(mode, _)| *mode == InputMode::Battle)
            .count()
    }
}

impl Frontend for ScriptedFrontend {
    fn render(&mut self, state: &GameState, mode: InputMode) -> io::Result<()> {
        self.frames.push((mode, state.frame()));
        Ok(())
    }

    fn next_command(&mut self, _mode: InputMode) -> io::Result<Command> {
        Ok(self.commands.pop_front().unwrap_or(Command::Quit))
    }

    fn pause(&mut self, pace: Duration) {
        self.pauses.push(pace);
    }
}

/// Seeded options with no random spawns and no battle delay
pub fn quiet_options(seed: u64) -> GameOptions {
    GameOptions {
        seed: Some(seed),
        spawn_spots: 0,
        battle_pace_ms: 0,
        ..GameOptions::default()
    }
}
