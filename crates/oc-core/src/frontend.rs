//! The seam between the simulation and whatever shows it

use std::io;
use std::time::Duration;

use crate::action::{Command, InputMode};
use crate::gameloop::GameState;

/// Render sink and input source
///
/// The core never touches a terminal itself. The game loop and the battle
/// engine call into a `Frontend` to draw, to block for the next command,
/// and to wait between battle rounds.
pub trait Frontend {
    /// Draw the whole state
    fn render(&mut self, state: &GameState, mode: InputMode) -> io::Result<()>;

    /// Block until the player enters a command meaningful in `mode`
    fn next_command(&mut self, mode: InputMode) -> io::Result<Command>;

    /// Wait between battle rounds
    fn pause(&mut self, pace: Duration);
}
