//! Player action system
//!
//! Commands the front end hands to the game loop, and the movement
//! directions shared by the player and mobs.

use strum::{Display, EnumIter};

use crate::object::ItemKind;

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step one cell
    Move(Direction),
    /// Confirm an attack during a battle
    Attack,
    /// Describe the backpack contents
    Inventory,
    /// Use one unit of a backpack item on the player
    Use(ItemKind),
    /// End the session
    Quit,
}

/// Which commands the front end is polling for
///
/// The same key can mean different things per mode: `a` moves left while
/// exploring and attacks while fighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputMode {
    Explore,
    Battle,
}

/// Cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Get (dx, dy) for this direction; y grows downwards
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Result of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    /// Target cell occupied or off the map; nothing changed
    Blocked,
}
